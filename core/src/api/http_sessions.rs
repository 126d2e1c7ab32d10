endpoints! {
    /// HTTP session tracking per site.
    HttpSessions;

    view fn sites() = "/httpSessions/view/sites";
    /// Sessions for `site`, or only the named `session`.
    view fn sessions(site: &str => "site", session: Option<&str> => "session") = "/httpSessions/view/sessions";
    view fn active_session(site: &str => "site") = "/httpSessions/view/activeSession";
    view fn session_tokens(site: &str => "site") = "/httpSessions/view/sessionTokens";
    view fn default_session_tokens() = "/httpSessions/view/defaultSessionTokens";

    /// Create an empty session, optionally named, and make it active.
    action fn create_empty_session(site: &str => "site", session: Option<&str> => "session") = "/httpSessions/action/createEmptySession";
    action fn remove_session(site: &str => "site", session: &str => "session") = "/httpSessions/action/removeSession";
    action fn set_active_session(site: &str => "site", session: &str => "session") = "/httpSessions/action/setActiveSession";
    action fn unset_active_session(site: &str => "site") = "/httpSessions/action/unsetActiveSession";
    action fn add_session_token(site: &str => "site", session_token: &str => "sessionToken") = "/httpSessions/action/addSessionToken";
    action fn remove_session_token(site: &str => "site", session_token: &str => "sessionToken") = "/httpSessions/action/removeSessionToken";
    action fn set_session_token_value(
        site: &str => "site",
        session: &str => "session",
        session_token: &str => "sessionToken",
        token_value: &str => "tokenValue",
    ) = "/httpSessions/action/setSessionTokenValue";
    action fn rename_session(
        site: &str => "site",
        old_session_name: &str => "oldSessionName",
        new_session_name: &str => "newSessionName",
    ) = "/httpSessions/action/renameSession";
    action fn add_default_session_token(session_token: &str => "sessionToken", token_enabled: Option<bool> => "tokenEnabled") = "/httpSessions/action/addDefaultSessionToken";
    action fn set_default_session_token_enabled(session_token: &str => "sessionToken", token_enabled: bool => "tokenEnabled") = "/httpSessions/action/setDefaultSessionTokenEnabled";
    action fn remove_default_session_token(session_token: &str => "sessionToken") = "/httpSessions/action/removeDefaultSessionToken";
}
