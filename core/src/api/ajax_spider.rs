endpoints! {
    /// The AJAX spider, which crawls with real browsers.
    AjaxSpider;

    view fn allowed_resources() = "/ajaxSpider/view/allowedResources";
    /// Whether the spider is `running` or `stopped`.
    view fn status() = "/ajaxSpider/view/status";
    /// Messages found by the spider, paged by `start` and `count`.
    view fn results(start: Option<u32> => "start", count: Option<u32> => "count") = "/ajaxSpider/view/results";
    view fn number_of_results() = "/ajaxSpider/view/numberOfResults";
    /// Messages found plus those out of scope and in error.
    view fn full_results() = "/ajaxSpider/view/fullResults";
    view fn option_browser_id() = "/ajaxSpider/view/optionBrowserId";
    view fn option_event_wait() = "/ajaxSpider/view/optionEventWait";
    view fn option_max_crawl_depth() = "/ajaxSpider/view/optionMaxCrawlDepth";
    view fn option_max_crawl_states() = "/ajaxSpider/view/optionMaxCrawlStates";
    view fn option_max_duration() = "/ajaxSpider/view/optionMaxDuration";
    view fn option_number_of_browsers() = "/ajaxSpider/view/optionNumberOfBrowsers";
    view fn option_reload_wait() = "/ajaxSpider/view/optionReloadWait";
    view fn option_click_default_elems() = "/ajaxSpider/view/optionClickDefaultElems";
    view fn option_click_elems_once() = "/ajaxSpider/view/optionClickElemsOnce";
    view fn option_enable_extensions() = "/ajaxSpider/view/optionEnableExtensions/";
    view fn option_random_inputs() = "/ajaxSpider/view/optionRandomInputs";

    /// Start a crawl from `url`, or from the URLs of `context_name`.
    action fn scan(
        url: Option<&str> => "url",
        in_scope: Option<bool> => "inScope",
        context_name: Option<&str> => "contextName",
        subtree_only: Option<bool> => "subtreeOnly",
    ) = "/ajaxSpider/action/scan";
    action fn scan_as_user(
        context_name: &str => "contextName",
        user_name: &str => "userName",
        url: Option<&str> => "url",
        subtree_only: Option<bool> => "subtreeOnly",
    ) = "/ajaxSpider/action/scanAsUser";
    action fn stop() = "/ajaxSpider/action/stop";
    action fn add_allowed_resource(regex: &str => "regex", enabled: Option<bool> => "enabled") = "/ajaxSpider/action/addAllowedResource";
    action fn remove_allowed_resource(regex: &str => "regex") = "/ajaxSpider/action/removeAllowedResource";
    action fn set_enabled_allowed_resource(regex: &str => "regex", enabled: bool => "enabled") = "/ajaxSpider/action/setEnabledAllowedResource";
    action fn set_option_browser_id(browser_id: &str => "String") = "/ajaxSpider/action/setOptionBrowserId";
    action fn set_option_click_default_elems(is_set: bool => "Boolean") = "/ajaxSpider/action/setOptionClickDefaultElems";
    action fn set_option_click_elems_once(is_set: bool => "Boolean") = "/ajaxSpider/action/setOptionClickElemsOnce";
    action fn set_option_enable_extensions(is_set: bool => "Boolean") = "/ajaxSpider/action/setOptionEnableExtensions/";
    action fn set_option_event_wait(time_in_ms: u32 => "Integer") = "/ajaxSpider/action/setOptionEventWait";
    action fn set_option_max_crawl_depth(depth: u32 => "Integer") = "/ajaxSpider/action/setOptionMaxCrawlDepth";
    action fn set_option_max_crawl_states(max_crawl_states: u32 => "Integer") = "/ajaxSpider/action/setOptionMaxCrawlStates";
    action fn set_option_max_duration(time_in_minutes: u32 => "Integer") = "/ajaxSpider/action/setOptionMaxDuration";
    action fn set_option_number_of_browsers(browsers: u32 => "Integer") = "/ajaxSpider/action/setOptionNumberOfBrowsers";
    action fn set_option_random_inputs(is_set: bool => "Boolean") = "/ajaxSpider/action/setOptionRandomInputs";
    action fn set_option_reload_wait(time_in_ms: u32 => "Integer") = "/ajaxSpider/action/setOptionReloadWait";
}
