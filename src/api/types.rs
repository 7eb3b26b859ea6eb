use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Published component, as listed by /v1/files/:key/components
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_links: Option<Vec<DocumentationLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DocumentationLink {
    pub uri: String,
}

/// RGBA color with every channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawColor")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

#[derive(Deserialize)]
struct RawColor {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default)]
    a: Option<f64>,
}

impl TryFrom<RawColor> for Color {
    type Error = String;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        let channels = [("r", Some(raw.r)), ("g", Some(raw.g)), ("b", Some(raw.b)), ("a", raw.a)];
        for (name, value) in channels {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(format!("color channel {} out of range [0, 1]: {}", name, v));
                }
            }
        }
        Ok(Color {
            r: raw.r,
            g: raw.g,
            b: raw.b,
            a: raw.a,
        })
    }
}

impl Color {
    /// Convert to hex string (#RRGGBB)
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolvedType {
    Boolean,
    Float,
    String,
    Color,
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::Boolean => write!(f, "BOOLEAN"),
            ResolvedType::Float => write!(f, "FLOAT"),
            ResolvedType::String => write!(f, "STRING"),
            ResolvedType::Color => write!(f, "COLOR"),
        }
    }
}

/// Where a variable may be applied in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableScope {
    AllFills,
    AllStrokes,
    TextContent,
    CornerRadius,
    WidthHeight,
    Gap,
    FrameFill,
    ShapeFill,
    TextFill,
    FrameStroke,
    RectangleStroke,
    EllipseStroke,
    VectorStroke,
    LineStroke,
    TextStroke,
}

/// Value of a variable in one mode
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Boolean(bool),
    Float(f64),
    String(String),
    Color(Color),
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Boolean(b) => write!(f, "{}", b),
            VariableValue::Float(n) => write!(f, "{}", n),
            VariableValue::String(s) => write!(f, "{}", s),
            VariableValue::Color(c) => write!(f, "{}", c.to_hex()),
        }
    }
}

/// Local variable. `resolved_type` is not checked against `values_by_mode`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variable_collection_id: String,
    pub resolved_type: ResolvedType,
    pub values_by_mode: BTreeMap<String, VariableValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_from_publishing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<BTreeSet<VariableScope>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_syntax: Option<BTreeMap<String, String>>,
}

/// Group of variables as delivered by /v1/files/:key/variables/local
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableGroup {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variables: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_from_publishing: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleType {
    Fill,
    Text,
    Effect,
    Grid,
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleType::Fill => write!(f, "FILL"),
            StyleType::Text => write!(f, "TEXT"),
            StyleType::Effect => write!(f, "EFFECT"),
            StyleType::Grid => write!(f, "GRID"),
        }
    }
}

/// Style definition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub style_type: StyleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Generic node in the Figma document tree
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Node::subtree_len).sum::<usize>()
    }

    /// Nodes are visible unless explicitly hidden
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// File returned by /v1/files/:key
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub name: String,
    pub last_modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_access: Option<String>,
    pub document: Node,
    #[serde(default)]
    pub components: BTreeMap<String, Component>,
    #[serde(default)]
    pub styles: BTreeMap<String, Style>,
}

/// Error payload the API may put in a failed response body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub err: String,
    pub status: Option<u16>,
}

/// Render format for image exports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Svg => write!(f, "svg"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Body of POST /v1/images/:key
#[derive(Debug, Serialize)]
pub struct ImagesRequest<'a> {
    pub ids: &'a [String],
    pub format: ImageFormat,
    #[serde(serialize_with = "serialize_scale")]
    pub scale: f64,
}

// Whole scales go out as integers (`2`, not `2.0`)
fn serialize_scale<S>(scale: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if scale.fract() == 0.0 && *scale >= 0.0 && *scale <= u32::MAX as f64 {
        serializer.serialize_u64(*scale as u64)
    } else {
        serializer.serialize_f64(*scale)
    }
}

/// Node id -> rendered image URL
pub type ImageMap = BTreeMap<String, String>;

/// Configuration and transport report, computed without network access
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentStatus {
    pub has_file_key: bool,
    pub has_token: bool,
    pub transport_available: bool,
    pub api_base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_optional_fields() {
        let component: Component = serde_json::from_value(json!({
            "key": "c1",
            "name": "Button",
            "documentationLinks": [{"uri": "https://docs.example.com/button"}]
        }))
        .unwrap();
        assert_eq!(component.key, "c1");
        assert_eq!(component.description, None);
        assert_eq!(
            component.documentation_links.unwrap()[0].uri,
            "https://docs.example.com/button"
        );
    }

    #[test]
    fn test_component_requires_name() {
        let result: Result<Component, _> = serde_json::from_value(json!({"key": "c1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_color_bounds() {
        let ok: Color = serde_json::from_value(json!({"r": 1.0, "g": 0.5, "b": 0, "a": 0.25})).unwrap();
        assert_eq!(ok.a, Some(0.25));
        assert_eq!(ok.to_hex(), "#FF8000");

        let too_bright: Result<Color, _> = serde_json::from_value(json!({"r": 1.2, "g": 0, "b": 0}));
        assert!(too_bright.is_err());

        let negative_alpha: Result<Color, _> =
            serde_json::from_value(json!({"r": 0, "g": 0, "b": 0, "a": -0.1}));
        assert!(negative_alpha.is_err());
    }

    #[test]
    fn test_variable_values_by_mode() {
        let variable: Variable = serde_json::from_value(json!({
            "key": "v1",
            "name": "color/primary",
            "variableCollectionId": "VariableCollectionId:1:0",
            "resolvedType": "COLOR",
            "valuesByMode": {
                "1:0": {"r": 0.0, "g": 0.4, "b": 1.0, "a": 1.0},
                "1:1": "#0066FF",
                "1:2": 12,
                "1:3": true
            },
            "scopes": ["ALL_FILLS", "FRAME_FILL", "ALL_FILLS"],
            "codeSyntax": {"WEB": "var(--color-primary)"}
        }))
        .unwrap();

        assert_eq!(variable.resolved_type, ResolvedType::Color);
        assert!(matches!(variable.values_by_mode["1:0"], VariableValue::Color(_)));
        assert_eq!(variable.values_by_mode["1:1"], VariableValue::String("#0066FF".into()));
        assert_eq!(variable.values_by_mode["1:2"], VariableValue::Float(12.0));
        assert_eq!(variable.values_by_mode["1:3"], VariableValue::Boolean(true));
        assert_eq!(variable.scopes.unwrap().len(), 2);
    }

    #[test]
    fn test_variable_rejects_unknown_type() {
        let result: Result<Variable, _> = serde_json::from_value(json!({
            "key": "v1",
            "name": "x",
            "variableCollectionId": "c",
            "resolvedType": "VECTOR",
            "valuesByMode": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_style_type() {
        let style: Style = serde_json::from_value(json!({
            "key": "s1",
            "name": "Heading/H1",
            "styleType": "TEXT"
        }))
        .unwrap();
        assert_eq!(style.style_type, StyleType::Text);
        assert_eq!(style.style_type.to_string(), "TEXT");
    }

    #[test]
    fn test_node_tree() {
        let node: Node = serde_json::from_value(json!({
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                {"id": "0:1", "name": "Page 1", "type": "CANVAS", "children": [
                    {"id": "1:2", "name": "Button", "type": "COMPONENT", "visible": false}
                ]}
            ]
        }))
        .unwrap();

        assert_eq!(node.subtree_len(), 3);
        assert!(node.is_visible());
        assert!(!node.children()[0].children()[0].is_visible());
    }

    #[test]
    fn test_images_request_body() {
        let ids = vec!["1:2".to_string()];
        let body = ImagesRequest {
            ids: &ids,
            format: ImageFormat::default(),
            scale: 2.0,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"ids": ["1:2"], "format": "svg", "scale": 2})
        );

        let body = ImagesRequest {
            ids: &ids,
            format: ImageFormat::Png,
            scale: 1.5,
        };
        assert_eq!(serde_json::to_value(&body).unwrap()["scale"], json!(1.5));
    }

    #[test]
    fn test_environment_status_json() {
        let status = EnvironmentStatus {
            has_file_key: true,
            has_token: false,
            transport_available: false,
            api_base_url: "https://api.figma.com/v1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({
                "hasFileKey": true,
                "hasToken": false,
                "transportAvailable": false,
                "apiBaseUrl": "https://api.figma.com/v1"
            })
        );
    }
}
