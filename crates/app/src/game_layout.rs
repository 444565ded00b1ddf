//! Layout model for the game's on-screen panels.
//!
//! ```text
//! +-------------------------+------------+
//! | map                     | character  |
//! |                         | mutations  |
//! |                         | inventory  |
//! +-------------------------+------------+
//! | log                                  |
//! +--------------------------------------+
//! | status                               |
//! +--------------------------------------+
//! ```

use taffy::TaffyTree;
use taffy::prelude::*;

pub struct LayoutNodes {
    root: NodeId,
    main_row: NodeId,
    side_col: NodeId,
    map: NodeId,
    character: NodeId,
    mutations: NodeId,
    inventory: NodeId,
    log: NodeId,
    status: NodeId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    pub fn as_tuple(self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLayout {
    pub map: PanelRect,
    pub character: PanelRect,
    pub mutations: PanelRect,
    pub inventory: PanelRect,
    pub log: PanelRect,
    pub status: PanelRect,
}

impl FrameLayout {
    pub fn panels(&self) -> [PanelRect; 6] {
        [self.map, self.character, self.mutations, self.inventory, self.log, self.status]
    }
}

fn gap_left(value: f32) -> taffy::Rect<LengthPercentageAuto> {
    taffy::Rect { left: length(value), right: zero(), top: zero(), bottom: zero() }
}

fn gap_top(value: f32) -> taffy::Rect<LengthPercentageAuto> {
    taffy::Rect { left: zero(), right: zero(), top: length(value), bottom: zero() }
}

pub fn setup_layout(taffy: &mut TaffyTree<()>, ui_scale: f32) -> taffy::TaffyResult<LayoutNodes> {
    let gap = 10.0 * ui_scale;
    let map = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() })?;
    let character = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(130.0 * ui_scale) },
        flex_shrink: 0.0,
        ..Default::default()
    })?;
    let mutations = taffy.new_leaf(Style {
        flex_grow: 1.0,
        margin: gap_top(gap),
        ..Default::default()
    })?;
    let inventory = taffy.new_leaf(Style {
        flex_grow: 1.0,
        margin: gap_top(gap),
        ..Default::default()
    })?;
    let side_col = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: length(300.0 * ui_scale), height: auto() },
            flex_shrink: 0.0,
            margin: gap_left(gap),
            ..Default::default()
        },
        &[character, mutations, inventory],
    )?;
    let main_row = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            flex_grow: 1.0,
            ..Default::default()
        },
        &[map, side_col],
    )?;
    let log = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(150.0 * ui_scale) },
        flex_shrink: 0.0,
        margin: gap_top(gap),
        ..Default::default()
    })?;
    let status = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(30.0 * ui_scale) },
        flex_shrink: 0.0,
        margin: gap_top(gap),
        ..Default::default()
    })?;
    let root = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: percent(1.0), height: percent(1.0) },
            padding: taffy::Rect {
                left: length(gap),
                right: length(gap),
                top: length(gap),
                bottom: length(gap),
            },
            ..Default::default()
        },
        &[main_row, log, status],
    )?;
    Ok(LayoutNodes { root, main_row, side_col, map, character, mutations, inventory, log, status })
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> taffy::TaffyResult<FrameLayout> {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size)?;

    let root = taffy.layout(nodes.root)?;
    let main_row = taffy.layout(nodes.main_row)?;
    let side_col = taffy.layout(nodes.side_col)?;

    Ok(FrameLayout {
        map: panel_rect(taffy.layout(nodes.map)?, &[root, main_row]),
        character: panel_rect(taffy.layout(nodes.character)?, &[root, main_row, side_col]),
        mutations: panel_rect(taffy.layout(nodes.mutations)?, &[root, main_row, side_col]),
        inventory: panel_rect(taffy.layout(nodes.inventory)?, &[root, main_row, side_col]),
        log: panel_rect(taffy.layout(nodes.log)?, &[root]),
        status: panel_rect(taffy.layout(nodes.status)?, &[root]),
    })
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
