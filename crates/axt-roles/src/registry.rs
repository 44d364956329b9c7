//! Implicit roles and redefinability
//!
//! The fixed tag -> role table for semantic HTML tags, plus the rules
//! restricting which tags may have their native role overridden.

use crate::Role;

/// Implicit role carried by a semantic HTML tag. Generic containers
/// (`div`, `span` and anything unrecognized) have none.
pub fn implicit_role_for(tag: &str) -> Option<Role> {
    Some(match tag.to_ascii_lowercase().as_str() {
        "a" => Role::Link,
        "article" => Role::Article,
        "aside" => Role::Complementary,
        "button" => Role::Button,
        "dd" => Role::Definition,
        "dialog" => Role::Dialog,
        "dt" => Role::Term,
        "fieldset" => Role::Group,
        "figure" => Role::Figure,
        "footer" => Role::ContentInfo,
        "form" => Role::Form,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Role::Heading,
        "header" => Role::Banner,
        "hr" => Role::Separator,
        "html" => Role::Document,
        "img" => Role::Img,
        "input" => Role::TextBox,
        "li" => Role::ListItem,
        "main" => Role::Main,
        "menu" => Role::List,
        "nav" => Role::Navigation,
        "ol" | "ul" => Role::List,
        "option" => Role::Option,
        "output" => Role::Status,
        "progress" => Role::ProgressBar,
        "section" => Role::Region,
        "select" => Role::Listbox,
        "table" => Role::Table,
        "tbody" | "tfoot" | "thead" => Role::RowGroup,
        "td" => Role::Cell,
        "textarea" => Role::TextBox,
        "th" => Role::ColumnHeader,
        "tr" => Role::Row,
        _ => return None,
    })
}

/// Tags that exist as required structural children of a semantic parent.
/// A `presentation` role on an ancestor does not strip these: they keep
/// their own resolution.
pub fn is_structural_child_tag(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "tr" | "td" | "th" | "thead" | "tbody" | "tfoot" | "li" | "option" | "dt" | "dd"
    )
}

/// Whether `tag` may be redefined to `role`.
///
/// Tags in the table and list families have fixed native semantics: they
/// may only move within their own family (a `td` can become a `gridcell`,
/// a `table` a `grid`, but a `tr` can never become a `button`).
/// `presentation` is always allowed; everything else is unrestricted.
pub fn is_redefinable(tag: &str, role: Role) -> bool {
    if role == Role::Presentation {
        return true;
    }
    let allowed: &[Role] = match tag.to_ascii_lowercase().as_str() {
        "table" => &[Role::Table, Role::Grid, Role::TreeGrid],
        "thead" | "tbody" | "tfoot" => &[Role::RowGroup],
        "tr" => &[Role::Row],
        "td" => &[Role::Cell, Role::GridCell],
        "th" => &[Role::Cell, Role::GridCell, Role::ColumnHeader, Role::RowHeader],
        "ol" | "ul" => &[
            Role::List,
            Role::Listbox,
            Role::Menu,
            Role::MenuBar,
            Role::RadioGroup,
            Role::TabList,
            Role::Tree,
            Role::Toolbar,
        ],
        "li" => &[
            Role::ListItem,
            Role::Option,
            Role::MenuItem,
            Role::MenuItemCheckbox,
            Role::MenuItemRadio,
            Role::Radio,
            Role::Tab,
            Role::TreeItem,
        ],
        "select" => &[Role::Listbox, Role::Menu],
        "option" => &[Role::Option],
        _ => return true,
    };
    allowed.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_roles() {
        assert_eq!(implicit_role_for("table"), Some(Role::Table));
        assert_eq!(implicit_role_for("tr"), Some(Role::Row));
        assert_eq!(implicit_role_for("TD"), Some(Role::Cell));
        assert_eq!(implicit_role_for("input"), Some(Role::TextBox));
        assert_eq!(implicit_role_for("div"), None);
        assert_eq!(implicit_role_for("span"), None);
    }

    #[test]
    fn test_redefinable_within_family() {
        assert!(is_redefinable("table", Role::Grid));
        assert!(is_redefinable("td", Role::GridCell));
        assert!(is_redefinable("tr", Role::Row));
        assert!(is_redefinable("li", Role::Tab));
    }

    #[test]
    fn test_not_redefinable_across_families() {
        assert!(!is_redefinable("tr", Role::Button));
        assert!(!is_redefinable("td", Role::Checkbox));
        assert!(!is_redefinable("option", Role::Link));
    }

    #[test]
    fn test_presentation_always_allowed() {
        assert!(is_redefinable("tr", Role::Presentation));
        assert!(is_redefinable("table", Role::Presentation));
    }

    #[test]
    fn test_unrestricted_tags() {
        assert!(is_redefinable("div", Role::Button));
        assert!(is_redefinable("input", Role::Combobox));
    }
}
