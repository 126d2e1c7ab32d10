endpoints! {
    /// Rules that rewrite the risk level of matching alerts, per context or
    /// globally.
    AlertFilter;

    view fn alert_filter_list(context_id: &str => "contextId") = "/alertFilter/view/alertFilterList";
    view fn global_alert_filter_list() = "/alertFilter/view/globalAlertFilterList";

    /// `new_level` is -1 (false positive), 0 (info), 1 (low), 2 (medium) or
    /// 3 (high).
    #[allow(clippy::too_many_arguments)]
    action fn add_alert_filter(
        context_id: &str => "contextId",
        rule_id: &str => "ruleId",
        new_level: i32 => "newLevel",
        url: Option<&str> => "url",
        url_is_regex: Option<bool> => "urlIsRegex",
        parameter: Option<&str> => "parameter",
        enabled: Option<bool> => "enabled",
        parameter_is_regex: Option<bool> => "parameterIsRegex",
        attack: Option<&str> => "attack",
        attack_is_regex: Option<bool> => "attackIsRegex",
        evidence: Option<&str> => "evidence",
        evidence_is_regex: Option<bool> => "evidenceIsRegex",
    ) = "/alertFilter/action/addAlertFilter";
    #[allow(clippy::too_many_arguments)]
    action fn remove_alert_filter(
        context_id: &str => "contextId",
        rule_id: &str => "ruleId",
        new_level: i32 => "newLevel",
        url: Option<&str> => "url",
        url_is_regex: Option<bool> => "urlIsRegex",
        parameter: Option<&str> => "parameter",
        enabled: Option<bool> => "enabled",
        parameter_is_regex: Option<bool> => "parameterIsRegex",
        attack: Option<&str> => "attack",
        attack_is_regex: Option<bool> => "attackIsRegex",
        evidence: Option<&str> => "evidence",
        evidence_is_regex: Option<bool> => "evidenceIsRegex",
    ) = "/alertFilter/action/removeAlertFilter";
    #[allow(clippy::too_many_arguments)]
    action fn add_global_alert_filter(
        rule_id: &str => "ruleId",
        new_level: i32 => "newLevel",
        url: Option<&str> => "url",
        url_is_regex: Option<bool> => "urlIsRegex",
        parameter: Option<&str> => "parameter",
        enabled: Option<bool> => "enabled",
        parameter_is_regex: Option<bool> => "parameterIsRegex",
        attack: Option<&str> => "attack",
        attack_is_regex: Option<bool> => "attackIsRegex",
        evidence: Option<&str> => "evidence",
        evidence_is_regex: Option<bool> => "evidenceIsRegex",
    ) = "/alertFilter/action/addGlobalAlertFilter";
    #[allow(clippy::too_many_arguments)]
    action fn remove_global_alert_filter(
        rule_id: &str => "ruleId",
        new_level: i32 => "newLevel",
        url: Option<&str> => "url",
        url_is_regex: Option<bool> => "urlIsRegex",
        parameter: Option<&str> => "parameter",
        enabled: Option<bool> => "enabled",
        parameter_is_regex: Option<bool> => "parameterIsRegex",
        attack: Option<&str> => "attack",
        attack_is_regex: Option<bool> => "attackIsRegex",
        evidence: Option<&str> => "evidence",
        evidence_is_regex: Option<bool> => "evidenceIsRegex",
    ) = "/alertFilter/action/removeGlobalAlertFilter";
    /// Apply every enabled filter to the alerts already raised.
    action fn apply_all() = "/alertFilter/action/applyAll";
    action fn apply_context() = "/alertFilter/action/applyContext";
    action fn apply_global() = "/alertFilter/action/applyGlobal";
    /// Report which existing alerts the enabled filters would change.
    action fn test_all() = "/alertFilter/action/testAll";
    action fn test_context() = "/alertFilter/action/testContext";
    action fn test_global() = "/alertFilter/action/testGlobal";
}

#[cfg(test)]
mod tests {
    use crate::client::tests::fake_client;
    use crate::config::ClientOptions;

    #[test]
    fn flags_are_sent_as_strings_and_unset_ones_dropped() {
        let (client, log) = fake_client(&ClientOptions::default(), 200, r#"{"Result":"OK"}"#);
        client
            .alert_filter()
            .add_global_alert_filter("10020", -1, Some("https://a/.*"), Some(true), None, Some(false), None, None, None, None, None)
            .unwrap();
        assert_eq!(
            log.lock().unwrap()[0].url,
            "http://zap/JSON/alertFilter/action/addGlobalAlertFilter?ruleId=10020&newLevel=-1&url=https%3A%2F%2Fa%2F.*&urlIsRegex=true&enabled=false"
        );
    }
}
