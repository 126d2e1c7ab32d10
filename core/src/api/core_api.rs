endpoints! {
    /// Core ZAP state: version, session, sites and alerts, plus the built-in
    /// reports served from the OTHER base address.
    Core;

    view fn version() = "/core/view/version";
    view fn hosts() = "/core/view/hosts";
    view fn sites() = "/core/view/sites";
    view fn urls(base_url: Option<&str> => "baseurl") = "/core/view/urls";
    /// Alerts, optionally restricted to `base_url` and paged by `start` and
    /// `count`. `risk_id` is 0 (info) to 3 (high).
    view fn alerts(
        base_url: Option<&str> => "baseurl",
        start: Option<u32> => "start",
        count: Option<u32> => "count",
        risk_id: Option<u32> => "riskId",
    ) = "/core/view/alerts";
    view fn number_of_alerts(base_url: Option<&str> => "baseurl", risk_id: Option<u32> => "riskId") = "/core/view/numberOfAlerts";

    /// Start a new session, discarding unsaved state unless `overwrite` is
    /// false and `name` already exists.
    action fn new_session(name: Option<&str> => "name", overwrite: Option<bool> => "overwrite") = "/core/action/newSession";
    action fn shutdown() = "/core/action/shutdown";

    other fn htmlreport() = "/core/other/htmlreport";
    other fn xmlreport() = "/core/other/xmlreport";
    other fn jsonreport() = "/core/other/jsonreport";
    other fn mdreport() = "/core/other/mdreport";
}
