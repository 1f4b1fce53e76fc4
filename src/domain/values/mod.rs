pub mod alert_flag;
pub mod feed_kind;
pub mod locale;
pub mod prefecture;
pub mod provenance;
pub mod risk_level;
pub mod weather_category;
