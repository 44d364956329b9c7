//! ARIA roles
//!
//! Closed enumeration of the supported role vocabulary. Abstract roles
//! are listed so they can be parsed and rejected; they are never valid
//! as a node's effective role.

use serde::{Deserialize, Serialize};

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // Document structure roles
    Article,
    Cell,
    ColumnHeader,
    Definition,
    Document,
    Feed,
    Figure,
    Group,
    Heading,
    Img,
    List,
    ListItem,
    Math,
    Note,
    Presentation,
    Row,
    RowGroup,
    RowHeader,
    Separator,
    Table,
    Term,
    Toolbar,

    // Composite widget roles
    Combobox,
    Grid,
    Listbox,
    Menu,
    MenuBar,
    RadioGroup,
    TabList,
    Tree,
    TreeGrid,

    // Standalone widget roles
    Alert,
    AlertDialog,
    Button,
    Checkbox,
    Dialog,
    GridCell,
    Link,
    Log,
    Marquee,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    ProgressBar,
    Radio,
    ScrollBar,
    SearchBox,
    Slider,
    SpinButton,
    Status,
    Switch,
    Tab,
    TabPanel,
    TextBox,
    Timer,
    Tooltip,
    TreeItem,

    // Abstract roles (never assignable to a concrete node)
    Command,
    Composite,
    Input,
    Landmark,
    RangeWidget,
    Section,
    SectionHead,
    Select,
    Structure,
    Widget,
    Window,
}

/// Role category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleCategory {
    Landmark,
    DocumentStructure,
    WidgetComposite,
    WidgetStandalone,
    Abstract,
}

impl Role {
    /// Parse a role token. `none` and `presentation` are synonyms.
    /// Returns `None` for tokens outside the supported vocabulary.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "article" => Self::Article,
            "cell" => Self::Cell,
            "columnheader" => Self::ColumnHeader,
            "definition" => Self::Definition,
            "document" => Self::Document,
            "feed" => Self::Feed,
            "figure" => Self::Figure,
            "group" => Self::Group,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "math" => Self::Math,
            "note" => Self::Note,
            "none" | "presentation" => Self::Presentation,
            "row" => Self::Row,
            "rowgroup" => Self::RowGroup,
            "rowheader" => Self::RowHeader,
            "separator" => Self::Separator,
            "table" => Self::Table,
            "term" => Self::Term,
            "toolbar" => Self::Toolbar,
            "combobox" => Self::Combobox,
            "grid" => Self::Grid,
            "listbox" => Self::Listbox,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "radiogroup" => Self::RadioGroup,
            "tablist" => Self::TabList,
            "tree" => Self::Tree,
            "treegrid" => Self::TreeGrid,
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "dialog" => Self::Dialog,
            "gridcell" => Self::GridCell,
            "link" => Self::Link,
            "log" => Self::Log,
            "marquee" => Self::Marquee,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::Option,
            "progressbar" => Self::ProgressBar,
            "radio" => Self::Radio,
            "scrollbar" => Self::ScrollBar,
            "searchbox" => Self::SearchBox,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "status" => Self::Status,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "tabpanel" => Self::TabPanel,
            "textbox" => Self::TextBox,
            "timer" => Self::Timer,
            "tooltip" => Self::Tooltip,
            "treeitem" => Self::TreeItem,
            "command" => Self::Command,
            "composite" => Self::Composite,
            "input" => Self::Input,
            "landmark" => Self::Landmark,
            "range" => Self::RangeWidget,
            "section" => Self::Section,
            "sectionhead" => Self::SectionHead,
            "select" => Self::Select,
            "structure" => Self::Structure,
            "widget" => Self::Widget,
            "window" => Self::Window,
            _ => return None,
        })
    }

    /// Canonical lowercase token for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Complementary => "complementary",
            Self::ContentInfo => "contentinfo",
            Self::Form => "form",
            Self::Main => "main",
            Self::Navigation => "navigation",
            Self::Region => "region",
            Self::Search => "search",
            Self::Article => "article",
            Self::Cell => "cell",
            Self::ColumnHeader => "columnheader",
            Self::Definition => "definition",
            Self::Document => "document",
            Self::Feed => "feed",
            Self::Figure => "figure",
            Self::Group => "group",
            Self::Heading => "heading",
            Self::Img => "img",
            Self::List => "list",
            Self::ListItem => "listitem",
            Self::Math => "math",
            Self::Note => "note",
            Self::Presentation => "presentation",
            Self::Row => "row",
            Self::RowGroup => "rowgroup",
            Self::RowHeader => "rowheader",
            Self::Separator => "separator",
            Self::Table => "table",
            Self::Term => "term",
            Self::Toolbar => "toolbar",
            Self::Combobox => "combobox",
            Self::Grid => "grid",
            Self::Listbox => "listbox",
            Self::Menu => "menu",
            Self::MenuBar => "menubar",
            Self::RadioGroup => "radiogroup",
            Self::TabList => "tablist",
            Self::Tree => "tree",
            Self::TreeGrid => "treegrid",
            Self::Alert => "alert",
            Self::AlertDialog => "alertdialog",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Dialog => "dialog",
            Self::GridCell => "gridcell",
            Self::Link => "link",
            Self::Log => "log",
            Self::Marquee => "marquee",
            Self::MenuItem => "menuitem",
            Self::MenuItemCheckbox => "menuitemcheckbox",
            Self::MenuItemRadio => "menuitemradio",
            Self::Option => "option",
            Self::ProgressBar => "progressbar",
            Self::Radio => "radio",
            Self::ScrollBar => "scrollbar",
            Self::SearchBox => "searchbox",
            Self::Slider => "slider",
            Self::SpinButton => "spinbutton",
            Self::Status => "status",
            Self::Switch => "switch",
            Self::Tab => "tab",
            Self::TabPanel => "tabpanel",
            Self::TextBox => "textbox",
            Self::Timer => "timer",
            Self::Tooltip => "tooltip",
            Self::TreeItem => "treeitem",
            Self::Command => "command",
            Self::Composite => "composite",
            Self::Input => "input",
            Self::Landmark => "landmark",
            Self::RangeWidget => "range",
            Self::Section => "section",
            Self::SectionHead => "sectionhead",
            Self::Select => "select",
            Self::Structure => "structure",
            Self::Widget => "widget",
            Self::Window => "window",
        }
    }

    /// Category this role belongs to.
    pub fn category(&self) -> RoleCategory {
        match self {
            Self::Banner
            | Self::Complementary
            | Self::ContentInfo
            | Self::Form
            | Self::Main
            | Self::Navigation
            | Self::Region
            | Self::Search => RoleCategory::Landmark,

            Self::Article
            | Self::Cell
            | Self::ColumnHeader
            | Self::Definition
            | Self::Document
            | Self::Feed
            | Self::Figure
            | Self::Group
            | Self::Heading
            | Self::Img
            | Self::List
            | Self::ListItem
            | Self::Math
            | Self::Note
            | Self::Presentation
            | Self::Row
            | Self::RowGroup
            | Self::RowHeader
            | Self::Separator
            | Self::Table
            | Self::Term
            | Self::Toolbar => RoleCategory::DocumentStructure,

            Self::Combobox
            | Self::Grid
            | Self::Listbox
            | Self::Menu
            | Self::MenuBar
            | Self::RadioGroup
            | Self::TabList
            | Self::Tree
            | Self::TreeGrid => RoleCategory::WidgetComposite,

            Self::Alert
            | Self::AlertDialog
            | Self::Button
            | Self::Checkbox
            | Self::Dialog
            | Self::GridCell
            | Self::Link
            | Self::Log
            | Self::Marquee
            | Self::MenuItem
            | Self::MenuItemCheckbox
            | Self::MenuItemRadio
            | Self::Option
            | Self::ProgressBar
            | Self::Radio
            | Self::ScrollBar
            | Self::SearchBox
            | Self::Slider
            | Self::SpinButton
            | Self::Status
            | Self::Switch
            | Self::Tab
            | Self::TabPanel
            | Self::TextBox
            | Self::Timer
            | Self::Tooltip
            | Self::TreeItem => RoleCategory::WidgetStandalone,

            Self::Command
            | Self::Composite
            | Self::Input
            | Self::Landmark
            | Self::RangeWidget
            | Self::Section
            | Self::SectionHead
            | Self::Select
            | Self::Structure
            | Self::Widget
            | Self::Window => RoleCategory::Abstract,
        }
    }

    /// Abstract roles may never be assigned to a concrete node.
    pub fn is_abstract(&self) -> bool {
        self.category() == RoleCategory::Abstract
    }

    /// Check if role is a landmark
    pub fn is_landmark(&self) -> bool {
        self.category() == RoleCategory::Landmark
    }

    /// Check if role is a widget (composite or standalone)
    pub fn is_widget(&self) -> bool {
        matches!(
            self.category(),
            RoleCategory::WidgetComposite | RoleCategory::WidgetStandalone
        )
    }

    /// Roles at least one of which must appear in this role's
    /// accessibility subtree. Empty slice means no requirement.
    pub fn required_owned(&self) -> &'static [Role] {
        match self {
            Self::Grid | Self::Table | Self::TreeGrid | Self::RowGroup => &[Role::Row],
            Self::Row => &[
                Role::Cell,
                Role::GridCell,
                Role::ColumnHeader,
                Role::RowHeader,
            ],
            Self::List => &[Role::ListItem],
            Self::Listbox => &[Role::Option],
            Self::Menu | Self::MenuBar => &[
                Role::MenuItem,
                Role::MenuItemCheckbox,
                Role::MenuItemRadio,
            ],
            Self::RadioGroup => &[Role::Radio],
            Self::TabList => &[Role::Tab],
            Self::Tree => &[Role::TreeItem],
            Self::Feed => &[Role::Article],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
