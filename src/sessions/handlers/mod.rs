pub mod http;
pub mod responses;
pub mod session;
#[cfg(test)]
pub mod tests;
