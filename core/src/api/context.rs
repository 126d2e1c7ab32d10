endpoints! {
    /// Contexts: named sets of URLs with their own scope and technology.
    Context;

    /// Names of the contexts in the current session.
    view fn context_list() = "/context/view/contextList";
    view fn exclude_regexs(context_name: &str => "contextName") = "/context/view/excludeRegexs";
    view fn include_regexs(context_name: &str => "contextName") = "/context/view/includeRegexs";
    view fn context(context_name: &str => "contextName") = "/context/view/context";
    /// Every technology name ZAP knows, e.g. `Db.MySQL` or `OS.Linux`.
    view fn technology_list() = "/context/view/technologyList";
    view fn included_technology_list(context_name: &str => "contextName") = "/context/view/includedTechnologyList";
    view fn excluded_technology_list(context_name: &str => "contextName") = "/context/view/excludedTechnologyList";
    view fn urls(context_name: &str => "contextName") = "/context/view/urls";

    action fn exclude_from_context(context_name: &str => "contextName", regex: &str => "regex") = "/context/action/excludeFromContext";
    action fn include_in_context(context_name: &str => "contextName", regex: &str => "regex") = "/context/action/includeInContext";
    /// Replace both regex lists. The lists are JSON arrays, e.g. `["https://a/.*"]`.
    action fn set_context_regexs(
        context_name: &str => "contextName",
        inc_regexs: &str => "incRegexs",
        exc_regexs: &str => "excRegexs",
    ) = "/context/action/setContextRegexs";
    /// How ZAP decides the session is still authenticated: `EACH_RESP`,
    /// `EACH_REQ`, `EACH_REQ_RESP` or `POLL_URL`.
    #[allow(clippy::too_many_arguments)]
    action fn set_context_checking_strategy(
        context_name: &str => "contextName",
        checking_strategy: &str => "checkingStrategy",
        poll_url: Option<&str> => "pollUrl",
        poll_data: Option<&str> => "pollData",
        poll_headers: Option<&str> => "pollHeaders",
        poll_frequency: Option<u32> => "pollFrequency",
        poll_frequency_units: Option<&str> => "pollFrequencyUnits",
    ) = "/context/action/setContextCheckingStrategy";
    action fn new_context(context_name: &str => "contextName") = "/context/action/newContext";
    action fn remove_context(context_name: &str => "contextName") = "/context/action/removeContext";
    /// `context_file` is resolved on the ZAP host.
    action fn export_context(context_name: &str => "contextName", context_file: &str => "contextFile") = "/context/action/exportContext";
    action fn import_context(context_file: &str => "contextFile") = "/context/action/importContext";
    /// `technology_names` is comma separated.
    action fn include_context_technologies(context_name: &str => "contextName", technology_names: &str => "technologyNames") = "/context/action/includeContextTechnologies";
    action fn include_all_context_technologies(context_name: &str => "contextName") = "/context/action/includeAllContextTechnologies";
    action fn exclude_context_technologies(context_name: &str => "contextName", technology_names: &str => "technologyNames") = "/context/action/excludeContextTechnologies";
    action fn exclude_all_context_technologies(context_name: &str => "contextName") = "/context/action/excludeAllContextTechnologies";
    action fn set_context_in_scope(context_name: &str => "contextName", boolean_in_scope: bool => "booleanInScope") = "/context/action/setContextInScope";
}
