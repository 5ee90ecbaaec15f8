pub mod env;
pub mod feed;
pub mod feed_client;

#[cfg(test)]
pub(crate) mod test_utils;
