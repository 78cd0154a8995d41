pub mod dns_client;
pub mod ntp_client;
pub mod resolver;
