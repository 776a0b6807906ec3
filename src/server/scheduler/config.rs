pub mod pulse {
    /// Default cron expression for the monitoring pulse
    /// Runs every 6 hours at the top of the hour (00:00, 06:00, 12:00, 18:00)
    pub const CRON_EXPRESSION: &str = "0 0 */6 * * *";
}
