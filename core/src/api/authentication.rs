endpoints! {
    /// Per-context authentication setup.
    Authentication;

    view fn get_supported_authentication_methods() = "/authentication/view/getSupportedAuthenticationMethods";
    /// Configuration parameters accepted by `auth_method_name`.
    view fn get_authentication_method_config_params(auth_method_name: &str => "authMethodName") = "/authentication/view/getAuthenticationMethodConfigParams";
    view fn get_authentication_method(context_id: &str => "contextId") = "/authentication/view/getAuthenticationMethod";
    view fn get_logged_in_indicator(context_id: &str => "contextId") = "/authentication/view/getLoggedInIndicator";
    view fn get_logged_out_indicator(context_id: &str => "contextId") = "/authentication/view/getLoggedOutIndicator";

    /// `auth_method_config_params` is itself URL-encoded, e.g.
    /// `loginUrl=https://a/login&loginRequestData=user%3D{%25username%25}`.
    action fn set_authentication_method(
        context_id: &str => "contextId",
        auth_method_name: &str => "authMethodName",
        auth_method_config_params: Option<&str> => "authMethodConfigParams",
    ) = "/authentication/action/setAuthenticationMethod";
    action fn set_logged_in_indicator(
        context_id: &str => "contextId",
        logged_in_indicator_regex: &str => "loggedInIndicatorRegex",
    ) = "/authentication/action/setLoggedInIndicator";
    action fn set_logged_out_indicator(
        context_id: &str => "contextId",
        logged_out_indicator_regex: &str => "loggedOutIndicatorRegex",
    ) = "/authentication/action/setLoggedOutIndicator";
}

#[cfg(test)]
mod tests {
    use crate::client::tests::fake_client;
    use crate::config::ClientOptions;

    #[test]
    fn nested_config_params_are_encoded_once_more() {
        let (client, log) = fake_client(&ClientOptions::default(), 200, r#"{"Result":"OK"}"#);
        client
            .authentication()
            .set_authentication_method("1", "formBasedAuthentication", Some("loginUrl=http://a/login"))
            .unwrap();
        assert_eq!(
            log.lock().unwrap()[0].url,
            "http://zap/JSON/authentication/action/setAuthenticationMethod?contextId=1&authMethodName=formBasedAuthentication&authMethodConfigParams=loginUrl%3Dhttp%3A%2F%2Fa%2Flogin"
        );
    }
}
