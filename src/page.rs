//! The target application's page map.
//!
//! The legacy time tracker exposes no API; its element identifiers are the
//! integration contract. They live here as one overridable mapping so a markup
//! change on the target page means editing configuration, not control flow.

use serde::Deserialize;

/// URLs and selectors of the legacy time tracker, overridable from the
/// configuration file's optional `page` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageMap {
    /// Application root, where the login form lives
    pub root_url: String,

    /// The timesheet entry page
    pub entry_url: String,

    pub login: LoginSelectors,
    pub entry: EntrySelectors,
}

/// Selectors of the login form
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoginSelectors {
    pub username_field: String,
    pub password_field: String,
    pub login_button: String,
}

/// Selectors of the timesheet entry form
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EntrySelectors {
    /// Inert label used to blur the active field and trigger its validation
    pub outside_label: String,

    pub date_field: String,
    pub project_list: String,
    pub assignment_list: String,
    pub hours_field: String,
    pub focal_list: String,
    pub description_field: String,
    pub accept_button: String,

    /// First cell of each row in the loaded-entries table
    pub loaded_rows: String,
}

impl Default for PageMap {
    fn default() -> Self {
        Self {
            root_url: "http://timetracker.bairesdev.com".to_string(),
            entry_url: "http://timetracker.bairesdev.com/CargaTimeTracker.aspx".to_string(),
            login: LoginSelectors::default(),
            entry: EntrySelectors::default(),
        }
    }
}

impl Default for LoginSelectors {
    fn default() -> Self {
        Self {
            username_field: "#ctl00_ContentPlaceHolder_UserNameTextBox".to_string(),
            password_field: "#ctl00_ContentPlaceHolder_PasswordTextBox".to_string(),
            login_button: "#ctl00_ContentPlaceHolder_LoginButton".to_string(),
        }
    }
}

impl Default for EntrySelectors {
    fn default() -> Self {
        Self {
            outside_label: "#ctl00_ContentPlaceHolder_FechaLabel".to_string(),
            date_field: "#ctl00_ContentPlaceHolder_txtFrom".to_string(),
            project_list: "#ctl00_ContentPlaceHolder_idProyectoDropDownList".to_string(),
            assignment_list: "#ctl00_ContentPlaceHolder_idTipoAsignacionDropDownList".to_string(),
            hours_field: "#ctl00_ContentPlaceHolder_TiempoTextBox".to_string(),
            focal_list: "#ctl00_ContentPlaceHolder_idFocalPointClientDropDownList".to_string(),
            description_field: "#ctl00_ContentPlaceHolder_DescripcionTextBox".to_string(),
            accept_button: "#ctl00_ContentPlaceHolder_btnAceptar".to_string(),
            loaded_rows: "tr > td:first-child".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_the_legacy_page() {
        let page = PageMap::default();
        assert!(page.entry_url.ends_with("CargaTimeTracker.aspx"));
        assert_eq!(page.login.login_button, "#ctl00_ContentPlaceHolder_LoginButton");
        assert_eq!(page.entry.accept_button, "#ctl00_ContentPlaceHolder_btnAceptar");
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let yaml = r##"
entry_url: "http://tracker.example.com/entry"
entry:
  date_field: "#date"
"##;
        let page: PageMap = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(page.entry_url, "http://tracker.example.com/entry");
        assert_eq!(page.entry.date_field, "#date");
        // Everything not named keeps its default
        assert_eq!(page.root_url, "http://timetracker.bairesdev.com");
        assert_eq!(page.entry.hours_field, "#ctl00_ContentPlaceHolder_TiempoTextBox");
        assert_eq!(page.login.username_field, "#ctl00_ContentPlaceHolder_UserNameTextBox");
    }
}
