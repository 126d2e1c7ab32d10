endpoints! {
    /// The active scanner, its scan policies and options.
    Ascan;

    /// Progress of a scan as a percentage. Without `scan_id` the latest scan
    /// is reported.
    view fn status(scan_id: Option<&str> => "scanId") = "/ascan/view/status";
    view fn scan_progress(scan_id: Option<&str> => "scanId") = "/ascan/view/scanProgress";
    view fn messages_ids(scan_id: &str => "scanId") = "/ascan/view/messagesIds";
    view fn alerts_ids(scan_id: &str => "scanId") = "/ascan/view/alertsIds";
    view fn scans() = "/ascan/view/scans";
    view fn scan_policy_names() = "/ascan/view/scanPolicyNames";
    view fn excluded_from_scan() = "/ascan/view/excludedFromScan";
    view fn scanners(scan_policy_name: Option<&str> => "scanPolicyName", policy_id: Option<&str> => "policyId") = "/ascan/view/scanners";
    view fn policies(scan_policy_name: Option<&str> => "scanPolicyName", policy_id: Option<&str> => "policyId") = "/ascan/view/policies";
    view fn attack_mode_queue() = "/ascan/view/attackModeQueue";
    view fn excluded_params() = "/ascan/view/excludedParams";
    view fn option_excluded_param_list() = "/ascan/view/optionExcludedParamList";
    view fn excluded_param_types() = "/ascan/view/excludedParamTypes";
    view fn option_attack_policy() = "/ascan/view/optionAttackPolicy";
    view fn option_default_policy() = "/ascan/view/optionDefaultPolicy";
    view fn option_delay_in_ms() = "/ascan/view/optionDelayInMs";
    view fn option_handle_anti_csrf_tokens() = "/ascan/view/optionHandleAntiCSRFTokens";
    view fn option_host_per_scan(hosts: Option<&str> => "hosts") = "/ascan/view/optionHostPerScan";
    view fn option_max_chart_time_in_mins(time_in_min: Option<&str> => "timeInMin") = "/ascan/view/optionMaxChartTimeInMins";
    view fn option_max_results_to_list() = "/ascan/view/optionMaxResultsToList";
    view fn option_max_rule_duration_in_mins(time_in_min: Option<&str> => "timeInMin") = "/ascan/view/optionMaxRuleDurationInMins";
    view fn option_max_scan_duration_in_mins(time_in_min: Option<&str> => "timeInMin") = "/ascan/view/optionMaxScanDurationInMins";
    view fn option_max_scans_in_ui() = "/ascan/view/optionMaxScansInUI";
    view fn option_target_params_enabled_rpc() = "/ascan/view/optionTargetParamsEnabledRPC";
    view fn option_target_params_injectable() = "/ascan/view/optionTargetParamsInjectable";
    view fn option_thread_per_host(threads: Option<&str> => "threads") = "/ascan/view/optionThreadPerHost";
    view fn option_add_query_param() = "/ascan/view/optionAddQueryParam";
    view fn option_allow_attack_on_start() = "/ascan/view/optionAllowAttackOnStart";
    view fn option_inject_plugin_id_in_header() = "/ascan/view/optionInjectPluginIdInHeader";
    view fn option_prompt_in_attack_mode() = "/ascan/view/optionPromptInAttackMode";
    view fn option_prompt_to_clear_finished_scans() = "/ascan/view/optionPromptToClearFinishedScans";
    view fn option_rescan_in_attack_mode() = "/ascan/view/optionRescanInAttackMode";
    view fn option_scan_headers_all_requests() = "/ascan/view/optionScanHeadersAllRequests";
    view fn option_scan_null_json_values() = "/ascan/view/optionScanNullJsonValues";
    view fn option_show_advanced_dialog() = "/ascan/view/optionShowAdvancedDialog";

    /// Start an active scan of `url`, or of every URL in `context_id`.
    /// Returns the new scan ID as `{"scan": "<id>"}`.
    #[allow(clippy::too_many_arguments)]
    action fn scan(
        url: Option<&str> => "url",
        recurse: Option<bool> => "recurse",
        in_scope_only: Option<bool> => "inScopeOnly",
        scan_policy_name: Option<&str> => "scanPolicyName",
        method: Option<&str> => "method",
        post_data: Option<&str> => "postdata",
        context_id: Option<&str> => "contextId",
    ) = "/ascan/action/scan";
    #[allow(clippy::too_many_arguments)]
    action fn scan_as_user(
        url: Option<&str> => "url",
        context_id: &str => "contextId",
        user_id: &str => "userId",
        recurse: Option<bool> => "recurse",
        scan_policy_name: Option<&str> => "scanPolicyName",
        method: Option<&str> => "method",
        post_data: Option<&str> => "postData",
    ) = "/ascan/action/scanAsUser";
    action fn pause(scan_id: &str => "scanId") = "/ascan/action/pause";
    action fn resume(scan_id: &str => "scanId") = "/ascan/action/resume";
    action fn stop(scan_id: &str => "scanId") = "/ascan/action/stop";
    action fn remove_scan(scan_id: &str => "scanId") = "/ascan/action/removeScan";
    action fn pause_all_scans() = "/ascan/action/pauseAllScans";
    action fn resume_all_scans() = "/ascan/action/resumeAllScans";
    action fn stop_all_scans() = "/ascan/action/stopAllScans";
    action fn remove_all_scans() = "/ascan/action/removeAllScans";
    action fn clear_excluded_from_scan() = "/ascan/action/clearExcludedFromScan";
    action fn exclude_from_scan(regex: &str => "regex") = "/ascan/action/excludeFromScan";
    action fn enable_all_scanners(scan_policy_name: Option<&str> => "scanPolicyName") = "/ascan/action/enableAllScanners";
    action fn disable_all_scanners(scan_policy_name: Option<&str> => "scanPolicyName") = "/ascan/action/disableAllScanners";
    /// `ids` is a comma separated list of scan rule IDs.
    action fn enable_scanners(ids: &str => "ids", scan_policy_name: Option<&str> => "scanPolicyName") = "/ascan/action/enableScanners";
    action fn disable_scanners(ids: &str => "ids", scan_policy_name: Option<&str> => "scanPolicyName") = "/ascan/action/disableScanners";
    action fn set_enabled_policies(ids: &str => "ids", scan_policy_name: Option<&str> => "scanPolicyName") = "/ascan/action/setEnabledPolicies";
    /// `attack_strength` is one of `LOW`, `MEDIUM`, `HIGH`, `INSANE`.
    action fn set_policy_attack_strength(
        id: &str => "id",
        attack_strength: &str => "attackStrength",
        scan_policy_name: Option<&str> => "scanPolicyName",
    ) = "/ascan/action/setPolicyAttackStrength";
    /// `alert_threshold` is one of `OFF`, `DEFAULT`, `LOW`, `MEDIUM`, `HIGH`.
    action fn set_policy_alert_threshold(
        id: &str => "id",
        alert_threshold: &str => "alertThreshold",
        scan_policy_name: Option<&str> => "scanPolicyName",
    ) = "/ascan/action/setPolicyAlertThreshold";
    action fn set_scanner_attack_strength(
        id: &str => "id",
        attack_strength: &str => "attackStrength",
        scan_policy_name: Option<&str> => "scanPolicyName",
    ) = "/ascan/action/setScannerAttackStrength";
    action fn set_scanner_alert_threshold(
        id: &str => "id",
        alert_threshold: &str => "alertThreshold",
        scan_policy_name: Option<&str> => "scanPolicyName",
    ) = "/ascan/action/setScannerAlertThreshold";
    action fn add_scan_policy(
        scan_policy_name: &str => "scanPolicyName",
        alert_threshold: Option<&str> => "alertThreshold",
        attack_strength: Option<&str> => "attackStrength",
    ) = "/ascan/action/addScanPolicy";
    action fn remove_scan_policy(scan_policy_name: &str => "scanPolicyName") = "/ascan/action/removeScanPolicy";
    action fn update_scan_policy(
        scan_policy_name: &str => "scanPolicyName",
        alert_threshold: Option<&str> => "alertThreshold",
        attack_strength: Option<&str> => "attackStrength",
    ) = "/ascan/action/updateScanPolicy";
    /// `path` is a policy file on the ZAP host.
    action fn import_scan_policy(path: &str => "path") = "/ascan/action/importScanPolicy";
    /// `param_type` is one of the names listed by `excluded_param_types`.
    action fn add_excluded_param(
        name: &str => "name",
        param_type: Option<&str> => "type",
        url: Option<&str> => "url",
    ) = "/ascan/action/addExcludedParam";
    action fn modify_excluded_param(
        idx: u32 => "idx",
        name: Option<&str> => "name",
        param_type: Option<&str> => "type",
        url: Option<&str> => "url",
    ) = "/ascan/action/modifyExcludedParam";
    action fn remove_excluded_param(idx: u32 => "idx") = "/ascan/action/removeExcludedParam";
    action fn skip_scanner(scan_id: &str => "scanId", scanner_id: &str => "scannerId") = "/ascan/action/skipScanner";
    action fn set_option_attack_policy(attack_policy: &str => "String") = "/ascan/action/setOptionAttackPolicy";
    action fn set_option_default_policy(default_policy: &str => "String") = "/ascan/action/setOptionDefaultPolicy";
    action fn set_option_add_query_param(is_set: bool => "Boolean") = "/ascan/action/setOptionAddQueryParam";
    action fn set_option_allow_attack_on_start(is_set: bool => "Boolean") = "/ascan/action/setOptionAllowAttackOnStart";
    action fn set_option_delay_in_ms(delay_in_ms: u32 => "Integer") = "/ascan/action/setOptionDelayInMs";
    action fn set_option_handle_anti_csrf_tokens(is_set: bool => "Boolean") = "/ascan/action/setOptionHandleAntiCSRFTokens";
    action fn set_option_host_per_scan(host_per_scan: u32 => "Integer") = "/ascan/action/setOptionHostPerScan";
    action fn set_option_inject_plugin_id_in_header(is_set: bool => "Boolean") = "/ascan/action/setOptionInjectPluginIdInHeader";
    action fn set_option_max_chart_time_in_mins(time_in_mins: u32 => "Integer") = "/ascan/action/setOptionMaxChartTimeInMins";
    action fn set_option_max_results_to_list(max_results_to_list: u32 => "Integer") = "/ascan/action/setOptionMaxResultsToList";
    action fn set_option_max_rule_duration_in_mins(duration_in_mins: u32 => "Integer") = "/ascan/action/setOptionMaxRuleDurationInMins";
    action fn set_option_max_scan_duration_in_mins(duration_in_mins: u32 => "Integer") = "/ascan/action/setOptionMaxScanDurationInMins";
    action fn set_option_max_scans_in_ui(max_scans_in_ui: u32 => "Integer") = "/ascan/action/setOptionMaxScansInUI";
    action fn set_option_prompt_in_attack_mode(is_set: bool => "Boolean") = "/ascan/action/setOptionPromptInAttackMode";
    action fn set_option_prompt_to_clear_finished_scans(is_set: bool => "Boolean") = "/ascan/action/setOptionPromptToClearFinishedScans";
    action fn set_option_rescan_in_attack_mode(is_set: bool => "Boolean") = "/ascan/action/setOptionRescanInAttackMode";
    action fn set_option_scan_headers_all_requests(is_set: bool => "Boolean") = "/ascan/action/setOptionScanHeadersAllRequests";
    action fn set_option_scan_null_json_values(is_set: bool => "Boolean") = "/ascan/action/setOptionScanNullJsonValues";
    action fn set_option_show_advanced_dialog(is_set: bool => "Boolean") = "/ascan/action/setOptionShowAdvancedDialog";
    /// Bitmask of the RPC types whose parameters are attacked.
    action fn set_option_target_params_enabled_rpc(target_params_enabled_rpc: u32 => "Integer") = "/ascan/action/setOptionTargetParamsEnabledRPC";
    /// Bitmask of the parameter locations that are attacked.
    action fn set_option_target_params_injectable(target_params_injectable: u32 => "Integer") = "/ascan/action/setOptionTargetParamsInjectable";
    action fn set_option_thread_per_host(thread_per_host: u32 => "Integer") = "/ascan/action/setOptionThreadPerHost";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::fake_client;
    use crate::config::ClientOptions;

    #[test]
    fn scan_uses_zap_wire_names() {
        let (client, log) = fake_client(&ClientOptions::default(), 200, r#"{"scan":"0"}"#);
        let scan = client
            .ascan()
            .scan(Some("http://example.com"), Some(false), None, None, Some("POST"), Some("a=1"), None)
            .unwrap();
        assert_eq!(scan, json!({"scan": "0"}));
        assert_eq!(
            log.lock().unwrap()[0].url,
            "http://zap/JSON/ascan/action/scan?url=http%3A%2F%2Fexample.com&recurse=false&method=POST&postdata=a%3D1"
        );
    }

    #[test]
    fn excluded_param_type_is_sent_as_type() {
        let (client, log) = fake_client(&ClientOptions::default(), 200, r#"{"Result":"OK"}"#);
        client.ascan().modify_excluded_param(0, None, Some("COOKIE"), None).unwrap();
        assert_eq!(
            log.lock().unwrap()[0].url,
            "http://zap/JSON/ascan/action/modifyExcludedParam?idx=0&type=COOKIE"
        );
    }

    #[test]
    fn enable_all_scanners_without_policy_sends_nothing() {
        let (client, log) = fake_client(&ClientOptions::default(), 200, r#"{"Result":"OK"}"#);
        client.ascan().enable_all_scanners(None).unwrap();
        assert_eq!(log.lock().unwrap()[0].url, "http://zap/JSON/ascan/action/enableAllScanners");
    }
}
