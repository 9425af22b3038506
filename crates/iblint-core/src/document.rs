//! View tree model consumed by rules.
//!
//! These types describe the output of an interface-builder decoder: xib
//! documents hold a flat list of top-level views, storyboard documents hold
//! scenes whose view controllers may own a root view. Rules only read them.
//!
//! Element kinds form a closed enum. Kinds with colour properties beyond
//! `backgroundColor`/`tintColor` carry them in their variant, and
//! [`ViewNode::direct_colors`] exposes every populated colour uniformly.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Element kind of a view node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "camelCase")]
pub enum ViewKind {
    /// `UIView`.
    View,
    /// `UILabel`.
    Label {
        /// Text colour.
        #[serde(default, rename = "textColor", skip_serializing_if = "Option::is_none")]
        text_color: Option<Color>,
    },
    /// `UITextView`.
    TextView {
        /// Text colour.
        #[serde(default, rename = "textColor", skip_serializing_if = "Option::is_none")]
        text_color: Option<Color>,
    },
    /// `UISwitch`.
    Switch {
        /// Tint of the switch track when on.
        #[serde(default, rename = "onTintColor", skip_serializing_if = "Option::is_none")]
        on_tint_color: Option<Color>,
    },
    /// `UIButton`.
    Button,
    /// `UITextField`.
    TextField,
    /// `UIImageView`.
    ImageView,
    /// `UIStackView`.
    StackView,
    /// `UIScrollView`.
    ScrollView,
    /// `UITableView`.
    TableView,
    /// `UICollectionView`.
    CollectionView,
    /// Any element the model does not distinguish.
    ///
    /// The element name is not kept. Such views are named `UIView` in
    /// messages unless they carry a custom class.
    #[serde(other)]
    Other,
}

impl ViewKind {
    /// UIKit class name of this kind.
    ///
    /// [`ViewKind::Other`] reports the base class `UIView`.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::View => "UIView",
            Self::Label { .. } => "UILabel",
            Self::TextView { .. } => "UITextView",
            Self::Switch { .. } => "UISwitch",
            Self::Button => "UIButton",
            Self::TextField => "UITextField",
            Self::ImageView => "UIImageView",
            Self::StackView => "UIStackView",
            Self::ScrollView => "UIScrollView",
            Self::TableView => "UITableView",
            Self::CollectionView => "UICollectionView",
            Self::Other => "UIView",
        }
    }

    /// A label with no text colour.
    #[must_use]
    pub fn label() -> Self {
        Self::Label { text_color: None }
    }
}

/// A colour value as written in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Reference to a named asset colour.
    Named {
        /// Asset name.
        name: String,
    },
    /// System colour, e.g. `systemBackgroundColor`.
    System {
        /// System colour name.
        #[serde(rename = "systemColor")]
        system_color: String,
    },
    /// Literal RGBA colour.
    Rgb {
        /// Red component.
        red: f64,
        /// Green component.
        green: f64,
        /// Blue component.
        blue: f64,
        /// Alpha component.
        #[serde(default = "opaque")]
        alpha: f64,
    },
    /// Literal grayscale colour.
    White {
        /// White component.
        white: f64,
        /// Alpha component.
        #[serde(default = "opaque")]
        alpha: f64,
    },
}

fn opaque() -> f64 {
    1.0
}

/// Value of a user-defined runtime attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// String value.
    String(String),
    /// Boolean value.
    Boolean(bool),
    /// Numeric value.
    Number(f64),
    /// Explicit nil.
    Nil,
}

impl AttributeValue {
    /// Returns the value when it is a non-empty string.
    #[must_use]
    pub fn as_non_empty_str(&self) -> Option<&str> {
        match self {
            Self::String(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

/// A key/value pair attached to a view in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedRuntimeAttribute {
    /// Key path the value is assigned to.
    pub key_path: String,
    /// Assigned value.
    #[serde(default)]
    pub value: Option<AttributeValue>,
}

impl UserDefinedRuntimeAttribute {
    /// Creates a string-valued attribute.
    #[must_use]
    pub fn string(key_path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key_path: key_path.into(),
            value: Some(AttributeValue::String(value.into())),
        }
    }

    /// Returns the value when it is a non-empty string.
    #[must_use]
    pub fn string_value(&self) -> Option<&str> {
        self.value.as_ref().and_then(AttributeValue::as_non_empty_str)
    }
}

/// One node of a view hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewNode {
    /// Element kind and kind-specific properties.
    #[serde(flatten)]
    pub kind: ViewKind,
    /// Object identifier in the document.
    #[serde(default)]
    pub id: Option<String>,
    /// Custom class assigned in the document.
    #[serde(default)]
    pub custom_class: Option<String>,
    /// Background colour.
    #[serde(default)]
    pub background_color: Option<Color>,
    /// Tint colour.
    #[serde(default)]
    pub tint_color: Option<Color>,
    /// User-defined runtime attributes in document order.
    #[serde(default)]
    pub user_defined_runtime_attributes: Vec<UserDefinedRuntimeAttribute>,
    /// Child views in document order.
    #[serde(default)]
    pub subviews: Vec<ViewNode>,
}

impl ViewNode {
    /// Creates an empty node of the given kind.
    #[must_use]
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            id: None,
            custom_class: None,
            background_color: None,
            tint_color: None,
            user_defined_runtime_attributes: Vec::new(),
            subviews: Vec::new(),
        }
    }

    /// Sets the custom class.
    #[must_use]
    pub fn with_custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Sets the background colour.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the tint colour.
    #[must_use]
    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.tint_color = Some(color);
        self
    }

    /// Appends a user-defined runtime attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: UserDefinedRuntimeAttribute) -> Self {
        self.user_defined_runtime_attributes.push(attribute);
        self
    }

    /// Appends a subview.
    #[must_use]
    pub fn with_subview(mut self, view: ViewNode) -> Self {
        self.subviews.push(view);
        self
    }

    /// Name used to refer to this view in messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.custom_class
            .as_deref()
            .unwrap_or_else(|| self.kind.class_name())
    }

    /// Populated colour properties, as `(property, colour)` pairs.
    ///
    /// Order is `backgroundColor`, `tintColor`, then the kind-specific
    /// properties.
    #[must_use]
    pub fn direct_colors(&self) -> Vec<(&'static str, &Color)> {
        let mut colors = Vec::new();
        if let Some(c) = &self.background_color {
            colors.push(("backgroundColor", c));
        }
        if let Some(c) = &self.tint_color {
            colors.push(("tintColor", c));
        }
        match &self.kind {
            ViewKind::Label {
                text_color: Some(c),
            }
            | ViewKind::TextView {
                text_color: Some(c),
            } => colors.push(("textColor", c)),
            ViewKind::Switch {
                on_tint_color: Some(c),
            } => colors.push(("onTintColor", c)),
            _ => {}
        }
        colors
    }
}

/// View controller of a storyboard scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewController {
    /// Controller element, e.g. `viewController` or `tableViewController`.
    #[serde(default)]
    pub element: Option<String>,
    /// Custom class assigned in the document.
    #[serde(default)]
    pub custom_class: Option<String>,
    /// Root view, if the controller owns one.
    #[serde(default)]
    pub root_view: Option<ViewNode>,
}

/// Storyboard scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Scene identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// View controller of the scene.
    #[serde(default)]
    pub view_controller: Option<ViewController>,
}

/// Common surface of decoded documents.
pub trait InterfaceBuilderFile {
    /// Path reported in violations.
    fn path_string(&self) -> &str;
}

/// Decoded `.xib` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XibDocument {
    /// Path of the source file.
    #[serde(skip)]
    pub path: String,
    /// Top-level views.
    #[serde(default)]
    pub views: Option<Vec<ViewNode>>,
}

impl XibDocument {
    /// Creates a document with the given top-level views.
    #[must_use]
    pub fn new(path: impl Into<String>, views: Vec<ViewNode>) -> Self {
        Self {
            path: path.into(),
            views: Some(views),
        }
    }
}

impl InterfaceBuilderFile for XibDocument {
    fn path_string(&self) -> &str {
        &self.path
    }
}

/// Decoded `.storyboard` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryboardDocument {
    /// Path of the source file.
    #[serde(skip)]
    pub path: String,
    /// Scenes in document order.
    #[serde(default)]
    pub scenes: Option<Vec<Scene>>,
}

impl StoryboardDocument {
    /// Creates a document with the given scenes.
    #[must_use]
    pub fn new(path: impl Into<String>, scenes: Vec<Scene>) -> Self {
        Self {
            path: path.into(),
            scenes: Some(scenes),
        }
    }

    /// Creates a document with one scene per root view.
    #[must_use]
    pub fn with_root_views(path: impl Into<String>, roots: Vec<ViewNode>) -> Self {
        let scenes = roots
            .into_iter()
            .map(|root| Scene {
                id: None,
                view_controller: Some(ViewController {
                    element: Some("viewController".to_string()),
                    custom_class: None,
                    root_view: Some(root),
                }),
            })
            .collect();
        Self::new(path, scenes)
    }
}

impl InterfaceBuilderFile for StoryboardDocument {
    fn path_string(&self) -> &str {
        &self.path
    }
}

/// Kind of interface-builder document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `.xib`
    Xib,
    /// `.storyboard`
    Storyboard,
}

impl DocumentKind {
    /// Detects the kind from a file name.
    ///
    /// Accepts `.xib` and `.storyboard`, optionally followed by `.json`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let name = name.strip_suffix(".json").unwrap_or(name);
        if name.ends_with(".xib") {
            Some(Self::Xib)
        } else if name.ends_with(".storyboard") {
            Some(Self::Storyboard)
        } else {
            None
        }
    }
}

/// Any decoded document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// A xib document.
    Xib(XibDocument),
    /// A storyboard document.
    Storyboard(StoryboardDocument),
}

impl Document {
    /// Kind of this document.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Xib(_) => DocumentKind::Xib,
            Self::Storyboard(_) => DocumentKind::Storyboard,
        }
    }
}

impl InterfaceBuilderFile for Document {
    fn path_string(&self) -> &str {
        match self {
            Self::Xib(doc) => doc.path_string(),
            Self::Storyboard(doc) => doc.path_string(),
        }
    }
}
