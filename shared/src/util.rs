/// Current UTC timestamp (milliseconds)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh instance id for order lines
pub fn new_instance_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
