endpoints! {
    /// ZAP release and add-on updates.
    Autoupdate;

    view fn latest_version_number() = "/autoupdate/view/latestVersionNumber";
    view fn is_latest_version() = "/autoupdate/view/isLatestVersion";
    view fn installed_addons() = "/autoupdate/view/installedAddons";
    view fn local_addons() = "/autoupdate/view/localAddons";
    view fn new_addons() = "/autoupdate/view/newAddons";
    view fn updated_addons() = "/autoupdate/view/updatedAddons";
    view fn marketplace_addons() = "/autoupdate/view/marketplaceAddons";
    view fn option_addon_directories() = "/autoupdate/view/optionAddonDirectories";
    view fn option_day_last_checked() = "/autoupdate/view/optionDayLastChecked";
    view fn option_day_last_install_warned() = "/autoupdate/view/optionDayLastInstallWarned";
    view fn option_day_last_update_warned() = "/autoupdate/view/optionDayLastUpdateWarned";
    view fn option_download_directory() = "/autoupdate/view/optionDownloadDirectory";
    view fn option_check_addon_updates() = "/autoupdate/view/optionCheckAddonUpdates";
    view fn option_check_on_start() = "/autoupdate/view/optionCheckOnStart";
    view fn option_download_new_release() = "/autoupdate/view/optionDownloadNewRelease";
    view fn option_install_addon_updates() = "/autoupdate/view/optionInstallAddonUpdates";
    view fn option_install_scanner_rules() = "/autoupdate/view/optionInstallScannerRules";
    view fn option_report_alpha_addons() = "/autoupdate/view/optionReportAlphaAddons";
    view fn option_report_beta_addons() = "/autoupdate/view/optionReportBetaAddons";
    view fn option_report_release_addons() = "/autoupdate/view/optionReportReleaseAddons";

    action fn download_latest_release() = "/autoupdate/action/downloadLatestRelease";
    /// Install the marketplace add-on with the given ID, e.g. `pscanrulesBeta`.
    action fn install_addon(id: &str => "id") = "/autoupdate/action/installAddon";
    /// `file` is an add-on path on the ZAP host.
    action fn install_local_addon(file: &str => "file") = "/autoupdate/action/installLocalAddon";
    action fn uninstall_addon(id: &str => "id") = "/autoupdate/action/uninstallAddon";
    action fn set_option_check_addon_updates(is_set: bool => "Boolean") = "/autoupdate/action/setOptionCheckAddonUpdates";
    action fn set_option_check_on_start(is_set: bool => "Boolean") = "/autoupdate/action/setOptionCheckOnStart";
    action fn set_option_download_new_release(is_set: bool => "Boolean") = "/autoupdate/action/setOptionDownloadNewRelease";
    action fn set_option_install_addon_updates(is_set: bool => "Boolean") = "/autoupdate/action/setOptionInstallAddonUpdates";
    action fn set_option_install_scanner_rules(is_set: bool => "Boolean") = "/autoupdate/action/setOptionInstallScannerRules";
    action fn set_option_report_alpha_addons(is_set: bool => "Boolean") = "/autoupdate/action/setOptionReportAlphaAddons";
    action fn set_option_report_beta_addons(is_set: bool => "Boolean") = "/autoupdate/action/setOptionReportBetaAddons";
    action fn set_option_report_release_addons(is_set: bool => "Boolean") = "/autoupdate/action/setOptionReportReleaseAddons";
}
