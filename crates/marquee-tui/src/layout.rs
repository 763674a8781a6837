//! Taffy layout for the splash header
//!
//! Stacks the logo, the paragraph, the link and (optionally) the button in a
//! centered flex column, the way a browser lays out a centered header. Content
//! taller than the area is start-aligned so it is clipped at the bottom only.

use ratatui::layout::Rect;
use taffy::{
    geometry::Size,
    style::{AlignItems, Dimension, FlexDirection, JustifyContent, Style},
    AvailableSpace, NodeId, TaffyError, TaffyTree,
};

/// Intrinsic sizes of the header's children, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSizes {
    pub logo: (u16, u16),
    pub paragraph: (u16, u16),
    pub link: (u16, u16),
    pub button: Option<(u16, u16)>,
}

impl HeaderSizes {
    pub fn total_height(&self) -> u16 {
        self.logo.1 + self.paragraph.1 + self.link.1 + self.button.map_or(0, |(_, h)| h)
    }

    /// Give up rows until the header fits in `height`: logo rows first, then
    /// paragraph rows down to `paragraph_min`. Link and button keep their size.
    pub fn fit_height(mut self, height: u16, paragraph_min: u16) -> Self {
        let mut excess = self.total_height().saturating_sub(height);

        let logo_cut = excess.min(self.logo.1);
        self.logo.1 -= logo_cut;
        excess -= logo_cut;

        let paragraph_cut = excess.min(self.paragraph.1.saturating_sub(paragraph_min));
        self.paragraph.1 -= paragraph_cut;

        self
    }
}

/// Where each header child ended up, clipped to the laid-out area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderRects {
    pub logo: Rect,
    pub paragraph: Rect,
    pub link: Rect,
    pub button: Option<Rect>,
}

pub struct HeaderLayout {
    taffy: TaffyTree<()>,
    root: NodeId,
    logo: NodeId,
    paragraph: NodeId,
    link: NodeId,
    button: Option<NodeId>,
    content_height: u16,
}

fn root_style(justify_content: JustifyContent) -> Style {
    Style {
        size: Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Percent(1.0),
        },
        flex_direction: FlexDirection::Column,
        align_items: Some(AlignItems::Center),
        justify_content: Some(justify_content),
        ..Default::default()
    }
}

impl HeaderLayout {
    /// Build the tree. Widths are clamped to `max_width` since cross-axis
    /// items do not shrink.
    pub fn new(sizes: HeaderSizes, max_width: u16) -> Result<Self, TaffyError> {
        let mut taffy = TaffyTree::new();

        let mut leaf = |(w, h): (u16, u16)| {
            taffy.new_leaf(Style {
                size: Size {
                    width: Dimension::Length(f32::from(w.min(max_width))),
                    height: Dimension::Length(f32::from(h)),
                },
                flex_shrink: 0.0,
                ..Default::default()
            })
        };

        let logo = leaf(sizes.logo)?;
        let paragraph = leaf(sizes.paragraph)?;
        let link = leaf(sizes.link)?;
        let button = sizes.button.map(&mut leaf).transpose()?;

        let mut children = vec![logo, paragraph, link];
        children.extend(button);

        let root = taffy.new_with_children(root_style(JustifyContent::Center), &children)?;

        Ok(Self {
            taffy,
            root,
            logo,
            paragraph,
            link,
            button,
            content_height: sizes.total_height(),
        })
    }

    pub fn compute(&mut self, area: Rect) -> Result<HeaderRects, TaffyError> {
        let justify_content = if self.content_height > area.height {
            JustifyContent::Start
        } else {
            JustifyContent::Center
        };
        self.taffy.set_style(self.root, root_style(justify_content))?;

        let available_space = Size {
            width: AvailableSpace::Definite(f32::from(area.width)),
            height: AvailableSpace::Definite(f32::from(area.height)),
        };
        self.taffy.compute_layout(self.root, available_space)?;

        let button = match self.button {
            Some(node) => Some(self.rect(node, area)?),
            None => None,
        };

        Ok(HeaderRects {
            logo: self.rect(self.logo, area)?,
            paragraph: self.rect(self.paragraph, area)?,
            link: self.rect(self.link, area)?,
            button,
        })
    }

    fn rect(&self, node: NodeId, area: Rect) -> Result<Rect, TaffyError> {
        let layout = self.taffy.layout(node)?;
        // Locations are non-negative: widths are clamped and tall content is
        // start-aligned.
        let rect = Rect {
            x: area.x.saturating_add(layout.location.x as u16),
            y: area.y.saturating_add(layout.location.y as u16),
            width: layout.size.width as u16,
            height: layout.size.height as u16,
        };
        if rect.intersects(area) {
            Ok(rect.intersection(area))
        } else {
            Ok(Rect::new(area.x, area.y, 0, 0))
        }
    }
}
