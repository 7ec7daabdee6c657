//! Layout description of the sign-in screen.
//!
//! [`render`] is a pure function from a [`DerivedValues`] snapshot to a
//! [`SceneLayout`]: a flat list of positioned nodes, ordered back to front,
//! that the host framework draws. It never touches the animation state.
//!
//! The screen is made of two layers:
//!
//! 1. The background image, clipped by a large circle and panned upwards as
//!    the form is revealed.
//! 2. The control area (the bottom third of the screen) holding the two
//!    sign-in buttons and, stacked over or under them depending on
//!    `form_z_index`, the credentials form with its close button.

use glam::{Affine2, Vec2};

use crate::config::{ScreenMetrics, ScreenStyle};
use crate::derived::DerivedValues;
use crate::geometry::{Circle, Color, Point, Rect, Size};

/// Stable identity of every node the screen draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Background,
    SignInButton,
    FacebookButton,
    CloseButton,
    EmailInput,
    PasswordInput,
    SubmitButton,
}

/// How an image fills its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFit {
    /// Scale to cover the frame, centred, cropping the overflow.
    #[default]
    Cover,
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A static image, clipped to a circle.
    Image {
        /// Asset path handed to the host's asset loader.
        asset: String,
        fit: ImageFit,
        clip: Circle,
    },
    /// A rounded button with a centred label.
    Button {
        label: &'static str,
        background: Color,
        text_color: Color,
        font_size: f32,
        corner_radius: f32,
    },
    /// The round close button whose glyph rotates with the progress.
    CloseButton {
        glyph: &'static str,
        background: Color,
        font_size: f32,
        corner_radius: f32,
        /// Rotation of the glyph in degrees.
        glyph_rotation: f32,
    },
    /// A single-line text field. Input handling belongs to the host.
    TextInput {
        placeholder: &'static str,
        placeholder_color: Color,
        corner_radius: f32,
        border_width: f32,
        border_color: Color,
        padding_left: f32,
    },
}

/// Drop shadow drawn under buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset: Point,
    pub color: Color,
}

/// One positioned element of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: NodeId,
    /// Untransformed frame in screen coordinates.
    pub frame: Rect,
    /// Transform applied to the frame when drawing.
    pub transform: Affine2,
    pub opacity: f32,
    /// 0 for the background, 1 for the control area.
    pub layer: u8,
    /// Ordering within the layer; higher draws on top.
    pub z_index: f32,
    pub shadow: Option<Shadow>,
    pub kind: NodeKind,
}

impl LayoutNode {
    /// Frame origin after applying the node transform.
    pub fn transformed_origin(&self) -> Point {
        self.transform
            .transform_point2(self.frame.origin.to_vec2())
            .into()
    }

    /// Transform of the close glyph: rotation about the button centre,
    /// followed by the node transform. `None` for other node kinds.
    pub fn glyph_transform(&self) -> Option<Affine2> {
        let NodeKind::CloseButton { glyph_rotation, .. } = self.kind else {
            return None;
        };
        let center = self.frame.center().to_vec2();
        Some(
            self.transform
                * Affine2::from_translation(center)
                * Affine2::from_angle(glyph_rotation.to_radians())
                * Affine2::from_translation(-center),
        )
    }

    /// Whether the node contributes any pixels.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// The full scene for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub size: Size,
    /// Nodes ordered back to front.
    pub nodes: Vec<LayoutNode>,
}

impl SceneLayout {
    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Node ids in drawing order.
    pub fn draw_order(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id).collect()
    }
}

/// Lay out the screen for one frame.
pub fn render(values: &DerivedValues, metrics: &ScreenMetrics, style: &ScreenStyle) -> SceneLayout {
    let width = metrics.width;
    let height = metrics.height;
    let area_height = metrics.control_area_height();
    let area_top = height - area_height;

    let shadow = Some(Shadow {
        offset: Point::new(style.shadow_offset[0], style.shadow_offset[1]),
        color: style.shadow_color.with_opacity(style.shadow_opacity),
    });

    let mut nodes = Vec::with_capacity(7);

    // Background layer
    let background_height = height + style.background_overscan;
    nodes.push(LayoutNode {
        id: NodeId::Background,
        frame: Rect::new(0.0, 0.0, width, background_height),
        transform: Affine2::from_translation(Vec2::new(0.0, values.background_y)),
        opacity: 1.0,
        layer: 0,
        z_index: 0.0,
        shadow: None,
        kind: NodeKind::Image {
            asset: style.background_image.clone(),
            fit: ImageFit::Cover,
            clip: Circle {
                center: Point::new(width / 2.0, 0.0),
                radius: background_height,
            },
        },
    });

    let row_width = width - 2.0 * style.button_margin_horizontal;
    let button_slot = style.button_height + 2.0 * style.button_margin_vertical;
    let input_slot = style.input_height + 2.0 * style.button_margin_vertical;

    // Credentials form, overlaying the button area
    let form_transform = Affine2::from_translation(Vec2::new(0.0, values.form_y));
    let form_node = |id, frame, shadow, kind| LayoutNode {
        id,
        frame,
        transform: form_transform,
        opacity: values.form_opacity,
        layer: 1,
        z_index: values.form_z_index,
        shadow,
        kind,
    };

    let close_size = style.close_button_size;
    nodes.push(form_node(
        NodeId::CloseButton,
        Rect::new(
            width / 2.0 - close_size / 2.0,
            area_top + style.close_button_top,
            close_size,
            close_size,
        ),
        shadow,
        NodeKind::CloseButton {
            glyph: "X",
            background: style.button_background,
            font_size: style.close_font_size,
            corner_radius: close_size / 2.0,
            glyph_rotation: values.close_icon_rotation,
        },
    ));

    let form_top = area_top + (area_height - 2.0 * input_slot - button_slot) / 2.0;
    let inputs = [
        (NodeId::EmailInput, "EMAIL"),
        (NodeId::PasswordInput, "PASSWORD"),
    ];
    for (row, (id, placeholder)) in inputs.into_iter().enumerate() {
        let top = form_top + row as f32 * input_slot + style.button_margin_vertical;
        nodes.push(form_node(
            id,
            Rect::new(style.button_margin_horizontal, top, row_width, style.input_height),
            None,
            NodeKind::TextInput {
                placeholder,
                placeholder_color: style.placeholder_color,
                corner_radius: style.input_radius,
                border_width: style.input_border_width,
                border_color: style.input_border_color,
                padding_left: style.input_padding_left,
            },
        ));
    }

    let submit_top = form_top + 2.0 * input_slot + style.button_margin_vertical;
    nodes.push(form_node(
        NodeId::SubmitButton,
        Rect::new(
            style.button_margin_horizontal,
            submit_top,
            row_width,
            style.button_height,
        ),
        shadow,
        NodeKind::Button {
            label: "SIGN IN",
            background: style.button_background,
            text_color: style.button_text,
            font_size: style.button_font_size,
            corner_radius: style.button_radius,
        },
    ));

    // Sign-in buttons, centred vertically in the control area
    let buttons_top = area_top + (area_height - 2.0 * button_slot) / 2.0;
    let button_transform = Affine2::from_translation(Vec2::new(0.0, values.button_y));
    let buttons = [
        (
            NodeId::SignInButton,
            "SIGN IN",
            style.button_background,
            style.button_text,
        ),
        (
            NodeId::FacebookButton,
            "SIGN IN WITH FACEBOOK",
            style.facebook_background,
            style.facebook_text,
        ),
    ];
    for (row, (id, label, background, text_color)) in buttons.into_iter().enumerate() {
        let top = buttons_top + row as f32 * button_slot + style.button_margin_vertical;
        nodes.push(LayoutNode {
            id,
            frame: Rect::new(style.button_margin_horizontal, top, row_width, style.button_height),
            transform: button_transform,
            opacity: values.button_opacity,
            layer: 1,
            z_index: 0.0,
            shadow,
            kind: NodeKind::Button {
                label,
                background,
                text_color,
                font_size: style.button_font_size,
                corner_radius: style.button_radius,
            },
        });
    }

    // Stable sort: on a z-index tie the form stays below the buttons.
    nodes.sort_by(|a, b| {
        a.layer
            .cmp(&b.layer)
            .then(a.z_index.total_cmp(&b.z_index))
    });

    SceneLayout {
        size: metrics.size(),
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::RevealInterpolations;

    fn layout_at(progress: f32) -> SceneLayout {
        let metrics = ScreenMetrics::new(300.0, 900.0).unwrap();
        let style = ScreenStyle::default();
        let values = RevealInterpolations::new(&metrics, &style)
            .unwrap()
            .derive(progress);
        render(&values, &metrics, &style)
    }

    #[test]
    fn test_all_nodes_present() {
        let layout = layout_at(1.0);
        assert_eq!(layout.nodes.len(), 7);
        assert_eq!(layout.size, Size::new(300.0, 900.0));
        assert_eq!(layout.nodes[0].id, NodeId::Background);
    }

    #[test]
    fn test_buttons_centred_in_control_area() {
        let layout = layout_at(1.0);
        // Control area spans 600..900; two 80px slots centred leave 70px above.
        let sign_in = layout.node(NodeId::SignInButton).unwrap();
        assert_eq!(sign_in.frame, Rect::new(20.0, 675.0, 260.0, 70.0));
        let facebook = layout.node(NodeId::FacebookButton).unwrap();
        assert_eq!(facebook.frame.origin.y, 755.0);
        assert_eq!(sign_in.transformed_origin(), sign_in.frame.origin);
    }

    #[test]
    fn test_form_geometry() {
        let layout = layout_at(0.0);
        let close = layout.node(NodeId::CloseButton).unwrap();
        assert_eq!(close.frame, Rect::new(130.0, 580.0, 40.0, 40.0));

        // Form content is 200px tall, centred in the 300px area.
        let email = layout.node(NodeId::EmailInput).unwrap();
        assert_eq!(email.frame.origin.y, 655.0);
        let password = layout.node(NodeId::PasswordInput).unwrap();
        assert_eq!(password.frame.origin.y, 715.0);
        let submit = layout.node(NodeId::SubmitButton).unwrap();
        assert_eq!(submit.frame.origin.y, 775.0);
        assert_eq!(submit.frame.bottom(), 845.0);
    }

    #[test]
    fn test_form_below_buttons_when_hidden() {
        let order = layout_at(1.0).draw_order();
        let form = order.iter().position(|id| *id == NodeId::EmailInput).unwrap();
        let button = order.iter().position(|id| *id == NodeId::SignInButton).unwrap();
        assert!(form < button);
    }

    #[test]
    fn test_form_below_buttons_at_zero_z_index() {
        let layout = layout_at(0.5);
        assert_eq!(layout.node(NodeId::EmailInput).unwrap().z_index, 0.0);
        let order = layout.draw_order();
        let form = order.iter().position(|id| *id == NodeId::CloseButton).unwrap();
        let button = order.iter().position(|id| *id == NodeId::FacebookButton).unwrap();
        assert!(form < button);
    }

    #[test]
    fn test_form_above_buttons_when_revealed() {
        let layout = layout_at(0.0);
        let order = layout.draw_order();
        let form = order.iter().position(|id| *id == NodeId::EmailInput).unwrap();
        let button = order.iter().position(|id| *id == NodeId::SignInButton).unwrap();
        assert!(form > button);
        assert_eq!(order[0], NodeId::Background);
        assert!(!layout.node(NodeId::SignInButton).unwrap().is_visible());
    }

    #[test]
    fn test_offsets_follow_progress() {
        let layout = layout_at(0.0);
        let button = layout.node(NodeId::SignInButton).unwrap();
        assert_eq!(button.transformed_origin().y, 775.0);

        let background = layout.node(NodeId::Background).unwrap();
        assert_eq!(background.transformed_origin().y, -350.0);
        assert_eq!(background.frame.height(), 950.0);
        let NodeKind::Image { clip, .. } = &background.kind else {
            panic!("background should be an image");
        };
        assert_eq!(clip.center, Point::new(150.0, 0.0));
        assert_eq!(clip.radius, 950.0);
    }

    #[test]
    fn test_close_glyph_rotation() {
        let layout = layout_at(0.0);
        let close = layout.node(NodeId::CloseButton).unwrap();
        let NodeKind::CloseButton { glyph_rotation, .. } = close.kind else {
            panic!("expected close button");
        };
        assert_eq!(glyph_rotation, 180.0);

        // Half a turn about the centre maps the top-left corner to the bottom-right.
        let transform = close.glyph_transform().unwrap();
        let corner = transform.transform_point2(close.frame.origin.to_vec2());
        assert!((corner.x - 170.0).abs() < 1e-3);
        assert!((corner.y - 620.0).abs() < 1e-3);

        let button = layout.node(NodeId::SignInButton).unwrap();
        assert!(button.glyph_transform().is_none());
    }
}
