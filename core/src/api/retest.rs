endpoints! {
    Retest;

    /// Re-run the scan rules that raised the given alerts (comma separated IDs).
    action fn retest(alert_ids: &str => "alertIds") = "/retest/action/retest";
}
