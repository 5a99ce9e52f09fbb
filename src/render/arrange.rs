//! The ten arrangement strategies. Each one turns the content blocks of a
//! slide into frames inside the content rectangle; all of them stack blocks
//! along a vertical cursor and differ in alignment, columns and the style
//! bucket each block is set in.

use super::{RenderedBlock, RenderedContent};
use crate::artboard::is_overflow;
use crate::colour::Colour;
use crate::frame::Frame;
use crate::layout::*;
use crate::schema::{LayoutDefinition, LayoutKind};
use crate::slide::{BlockStyle, BulletsBlock, ImageBlock, TextBlock, TextRole};
use crate::theme::{StyleBucket, Theme};
use crate::units::Px;
use std::borrow::Cow;
use std::collections::HashMap;

const BULLET_MARKER: &str = "•";
const TIMELINE_MARKER: &str = "○";

/// A content block of a slide, as far as arrangement is concerned
#[derive(Debug, Copy, Clone)]
pub(crate) enum Content<'a> {
    Text(TextRole, &'a TextBlock),
    Bullets(&'a BulletsBlock),
    Image(&'a ImageBlock),
}

impl<'a> Content<'a> {
    fn role(&self) -> Option<TextRole> {
        match self {
            Content::Text(role, _) => Some(*role),
            Content::Bullets(_) => Some(TextRole::Bullets),
            Content::Image(_) => None,
        }
    }

    fn is_image(&self) -> bool {
        matches!(self, Content::Image(_))
    }
}

/// A content block with its slide order and chosen bucket
#[derive(Debug, Copy, Clone)]
struct Item<'a> {
    index: usize,
    content: Content<'a>,
    bucket: StyleBucket,
}

/// A measured block not yet given a position
struct Measured {
    id: String,
    style: Option<TextStyle>,
    align: TextAlign,
    content: RenderedContent,
    height: Px,
}

#[derive(Copy, Clone)]
enum Anchoring {
    Center,
    Bottom,
}

type Buckets = fn(TextRole, usize) -> StyleBucket;

fn stack_bucket(role: TextRole, _nth: usize) -> StyleBucket {
    match role {
        TextRole::Title => StyleBucket::H1,
        TextRole::Subtitle => StyleBucket::H2,
        TextRole::Body | TextRole::Bullets => StyleBucket::Body,
    }
}

fn display_bucket(role: TextRole, nth: usize) -> StyleBucket {
    match role {
        TextRole::Title if nth == 0 => StyleBucket::Display,
        _ => stack_bucket(role, nth),
    }
}

fn stat_bucket(role: TextRole, nth: usize) -> StyleBucket {
    match role {
        TextRole::Title => StyleBucket::H2,
        TextRole::Body if nth == 0 => StyleBucket::Stat,
        TextRole::Body | TextRole::Subtitle => StyleBucket::Caption,
        TextRole::Bullets => StyleBucket::Body,
    }
}

fn quote_bucket(role: TextRole, nth: usize) -> StyleBucket {
    match role {
        TextRole::Title => StyleBucket::H2,
        TextRole::Body if nth == 0 => StyleBucket::Quote,
        TextRole::Subtitle => StyleBucket::Caption,
        TextRole::Body | TextRole::Bullets => StyleBucket::Body,
    }
}

fn focus_bucket(role: TextRole, _nth: usize) -> StyleBucket {
    match role {
        TextRole::Title => StyleBucket::H2,
        TextRole::Subtitle => StyleBucket::Caption,
        TextRole::Body | TextRole::Bullets => StyleBucket::Body,
    }
}

fn cased<'t>(text: &'t str, style: Option<&BlockStyle>) -> Cow<'t, str> {
    match style {
        Some(style) if style.uppercase => Cow::Owned(text.to_uppercase()),
        _ => Cow::Borrowed(text),
    }
}

/// The first title of the slide goes on top, everything else below it
fn split_heading<'a>(items: &[Item<'a>]) -> (Option<Item<'a>>, Vec<Item<'a>>) {
    match items
        .iter()
        .position(|item| item.content.role() == Some(TextRole::Title))
    {
        Some(at) => {
            let mut rest = items.to_vec();
            let heading = rest.remove(at);
            (Some(heading), rest)
        }
        None => (None, items.to_vec()),
    }
}

pub(crate) struct Arranger<'a, M: Measurer + ?Sized> {
    measurer: &'a mut M,
    theme: &'a Theme,
    layout: &'a LayoutDefinition,
    rect: Frame,
    /// Colour of regular text
    ink: Colour,
    /// Colour of captions
    muted: Colour,
}

impl<'a, M: Measurer + ?Sized> Arranger<'a, M> {
    pub(crate) fn new(
        measurer: &'a mut M,
        theme: &'a Theme,
        layout: &'a LayoutDefinition,
        rect: Frame,
    ) -> Arranger<'a, M> {
        // section breaks set their text on the primary colour
        let (ink, muted) = match layout.kind {
            LayoutKind::SectionBreak => (theme.colors.background, theme.colors.surface),
            _ => (theme.colors.text, theme.colors.text_muted),
        };
        Arranger {
            measurer,
            theme,
            layout,
            rect,
            ink,
            muted,
        }
    }

    /// Arrange the content blocks. The result is always in slide order,
    /// whichever column or position a block ended up in.
    pub(crate) fn arrange(mut self, contents: &[Content<'_>]) -> Vec<RenderedBlock> {
        let spacing = &self.theme.spacing;
        let (block_gap, vertical_gap) = (spacing.block_gap, spacing.vertical_gap);
        let rect = self.rect;

        let mut placed = match self.layout.kind {
            LayoutKind::Title => {
                let items = self.assign(contents, display_bucket);
                self.anchored(&items, rect, block_gap, TextAlign::Center, Anchoring::Center)
            }
            LayoutKind::Cover => {
                let items = self.assign(contents, display_bucket);
                self.anchored(&items, rect, vertical_gap, TextAlign::Left, Anchoring::Bottom)
            }
            LayoutKind::SectionBreak => {
                let items = self.assign(contents, display_bucket);
                self.anchored(&items, rect, block_gap, TextAlign::Center, Anchoring::Center)
            }
            LayoutKind::Quote => {
                let items = self.assign(contents, quote_bucket);
                self.anchored(&items, rect, vertical_gap, TextAlign::Center, Anchoring::Center)
            }
            LayoutKind::Stat => self.stat(contents),
            LayoutKind::TwoCol => self.columns(contents, true),
            LayoutKind::Comparison => self.columns(contents, false),
            LayoutKind::ImageFocus => self.image_focus(contents),
            LayoutKind::Timeline => self.timeline(contents),
            LayoutKind::List => self.list(contents),
            LayoutKind::Unknown => {
                log::debug!(
                    "layout `{}` has an unknown kind; arranging it as a list",
                    self.layout.id
                );
                self.list(contents)
            }
        };

        placed.sort_by_key(|(index, _)| *index);
        placed.into_iter().map(|(_, block)| block).collect()
    }

    /// Pick a bucket for every block. The first block of each role takes the
    /// style of the layout's slot for that role, if it declares one; the rest
    /// use the strategy's defaults.
    fn assign<'c>(&self, contents: &[Content<'c>], defaults: Buckets) -> Vec<Item<'c>> {
        let mut seen: HashMap<TextRole, usize> = HashMap::new();
        contents
            .iter()
            .enumerate()
            .map(|(index, &content)| {
                let bucket = match content.role() {
                    Some(role) => {
                        let nth = seen.entry(role).or_insert(0);
                        let slot = if *nth == 0 {
                            self.layout.bucket_for(role)
                        } else {
                            None
                        };
                        let bucket = slot.unwrap_or_else(|| defaults(role, *nth));
                        *nth += 1;
                        bucket
                    }
                    None => StyleBucket::Body,
                };
                Item {
                    index,
                    content,
                    bucket,
                }
            })
            .collect()
    }

    fn styled(
        &self,
        bucket: StyleBucket,
        overrides: Option<&BlockStyle>,
        align: TextAlign,
    ) -> (TextStyle, TextAlign) {
        let colour = match bucket {
            StyleBucket::Caption => self.muted,
            _ => self.ink,
        };
        let mut style = self.theme.text_style(bucket, colour);
        let mut align = align;
        if let Some(overrides) = overrides {
            if let Some(colour) = overrides.color {
                style.color = colour;
            }
            if let Some(family) = &overrides.font_family {
                style.font_family = family.clone();
            }
            if let Some(text_align) = overrides.text_align {
                align = text_align;
            }
        }
        (style, align)
    }

    fn measure(&mut self, item: Item<'_>, width: Px, align: TextAlign) -> Measured {
        let theme = self.theme;
        let spacing = &theme.spacing;
        match item.content {
            Content::Text(_, block) => {
                let (style, align) = self.styled(item.bucket, block.style.as_ref(), align);
                let text = cased(&block.text, block.style.as_ref());
                let layout = measure_text(&mut *self.measurer, &text, &style, width);
                Measured {
                    id: block.id.clone(),
                    height: layout.total_height,
                    content: RenderedContent::Text {
                        lines: layout.lines,
                        line_height: layout.line_height,
                    },
                    style: Some(style),
                    align,
                }
            }
            Content::Bullets(block) => {
                let (style, align) = self.styled(item.bucket, block.style.as_ref(), align);
                let items: Vec<String> = block
                    .bullets
                    .iter()
                    .map(|text| cased(text, block.style.as_ref()).into_owned())
                    .collect();
                let timeline = self.layout.kind == LayoutKind::Timeline;
                let bullet = BulletStyle {
                    marker: if timeline { TIMELINE_MARKER } else { BULLET_MARKER }.to_string(),
                    gap: spacing.bullet_gap,
                    indent: spacing.bullet_indent,
                };
                let mut layout = layout_bullets(
                    &mut *self.measurer,
                    &BulletLayoutRequest {
                        items: &items,
                        style: &style,
                        frame_width: width,
                        bullet: &bullet,
                    },
                );
                if timeline && !items.is_empty() {
                    // timeline entries are spaced apart
                    for line in layout.lines.iter_mut() {
                        line.y_offset += bullet.gap * line.item_index as f32;
                    }
                    layout.total_height += bullet.gap * (items.len() - 1) as f32;
                }
                Measured {
                    id: block.id.clone(),
                    height: layout.total_height,
                    content: RenderedContent::Bullets {
                        lines: layout.lines,
                    },
                    style: Some(style),
                    align,
                }
            }
            Content::Image(block) => Measured {
                id: block.id.clone(),
                height: spacing.image_height,
                content: RenderedContent::Image {
                    src: block.src.clone(),
                    alt: block.alt.clone(),
                    fit: block.fit,
                },
                style: None,
                align,
            },
        }
    }

    /// Give a measured block its frame, clamped to what is left above `bottom`
    fn place(&self, measured: Measured, x: Px, y: Px, w: Px, bottom: Px) -> RenderedBlock {
        let available = (bottom - y).max(Px::ZERO);
        let overflow = is_overflow(measured.height, available);
        if overflow {
            log::warn!(
                "block `{}` in layout `{}` needs {} but only {} remain",
                measured.id,
                self.layout.id,
                measured.height,
                available
            );
        }
        let frame = Frame {
            x,
            y,
            w,
            h: measured.height.min(available),
        };
        log::trace!("placed `{}` at {:?}", measured.id, frame);

        RenderedBlock {
            id: measured.id,
            frame,
            style: measured.style,
            align: measured.align,
            content: measured.content,
            overflow,
        }
    }

    /// Stack blocks top-down in `column` starting at `top`. Returns the
    /// placed blocks and the cursor after the last one.
    fn stack(
        &mut self,
        items: &[Item<'_>],
        column: Frame,
        top: Px,
        gap: Px,
        align: TextAlign,
    ) -> (Vec<(usize, RenderedBlock)>, Px) {
        let mut placed = Vec::with_capacity(items.len());
        let mut cursor = top;
        for &item in items {
            let measured = self.measure(item, column.w, align);
            let height = measured.height;
            let block = self.place(measured, column.x, cursor, column.w, column.bottom());
            placed.push((item.index, block));
            cursor += height + gap;
        }
        (placed, cursor)
    }

    /// Stack blocks as one group, centred in or sitting on the bottom of `area`
    fn anchored(
        &mut self,
        items: &[Item<'_>],
        area: Frame,
        gap: Px,
        align: TextAlign,
        anchoring: Anchoring,
    ) -> Vec<(usize, RenderedBlock)> {
        let measured: Vec<(usize, Measured)> = items
            .iter()
            .map(|&item| (item.index, self.measure(item, area.w, align)))
            .collect();
        let gaps = gap * measured.len().saturating_sub(1) as f32;
        let total: Px = measured.iter().map(|(_, m)| m.height).sum::<Px>() + gaps;
        let free = (area.h - total).max(Px::ZERO);

        let mut cursor = match anchoring {
            Anchoring::Center => area.y + free / 2.0,
            Anchoring::Bottom => area.y + free,
        };
        measured
            .into_iter()
            .map(|(index, m)| {
                let height = m.height;
                let block = self.place(m, area.x, cursor, area.w, area.bottom());
                cursor += height + gap;
                (index, block)
            })
            .collect()
    }

    fn list(&mut self, contents: &[Content<'_>]) -> Vec<(usize, RenderedBlock)> {
        let items = self.assign(contents, stack_bucket);
        let rect = self.rect;
        let gap = self.theme.spacing.block_gap;
        self.stack(&items, rect, rect.y, gap, TextAlign::Left).0
    }

    /// Heading on top, then everything else stacked in one column. Returns
    /// the placed heading (if any) and where the rest may start.
    fn heading(&mut self, heading: Option<Item<'_>>, align: TextAlign) -> (Vec<(usize, RenderedBlock)>, Px) {
        let rect = self.rect;
        match heading {
            Some(item) => {
                let gap = self.theme.spacing.block_gap;
                self.stack(&[item], rect, rect.y, gap, align)
            }
            None => (Vec::new(), rect.y),
        }
    }

    /// Two columns under the heading. With `images_right`, text goes left and
    /// images right whenever the slide has images; otherwise the blocks are
    /// split in half by count, the left column taking the odd one out.
    fn columns(&mut self, contents: &[Content<'_>], images_right: bool) -> Vec<(usize, RenderedBlock)> {
        let items = self.assign(contents, stack_bucket);
        let (heading, rest) = split_heading(&items);
        let (mut placed, top) = self.heading(heading, TextAlign::Left);

        let spacing = &self.theme.spacing;
        let (gap, column_gap) = (spacing.block_gap, spacing.column_gap);
        let (left_frame, right_frame) = self.rect.below(top).split_columns(column_gap);

        let (left, right): (Vec<Item>, Vec<Item>) =
            if images_right && rest.iter().any(|item| item.content.is_image()) {
                rest.iter().partition(|item| !item.content.is_image())
            } else {
                let mid = rest.len().div_ceil(2);
                (rest[..mid].to_vec(), rest[mid..].to_vec())
            };

        placed.extend(self.stack(&left, left_frame, left_frame.y, gap, TextAlign::Left).0);
        placed.extend(self.stack(&right, right_frame, right_frame.y, gap, TextAlign::Left).0);
        placed
    }

    /// The big number (and its label) centred below the heading
    fn stat(&mut self, contents: &[Content<'_>]) -> Vec<(usize, RenderedBlock)> {
        let items = self.assign(contents, stat_bucket);
        let (heading, rest) = split_heading(&items);
        let (mut placed, top) = self.heading(heading, TextAlign::Center);
        let area = self.rect.below(top);
        let gap = self.theme.spacing.vertical_gap;
        placed.extend(self.anchored(&rest, area, gap, TextAlign::Center, Anchoring::Center));
        placed
    }

    /// The first image across the top of the content, everything else below
    fn image_focus(&mut self, contents: &[Content<'_>]) -> Vec<(usize, RenderedBlock)> {
        let items = self.assign(contents, focus_bucket);
        let rect = self.rect;
        let gap = self.theme.spacing.block_gap;

        match items.iter().position(|item| item.content.is_image()) {
            Some(at) => {
                let mut rest = items.clone();
                let image = rest.remove(at);
                let (mut placed, top) = self.stack(&[image], rect, rect.y, gap, TextAlign::Left);
                placed.extend(self.stack(&rest, rect.below(top), top, gap, TextAlign::Left).0);
                placed
            }
            None => self.stack(&items, rect, rect.y, gap, TextAlign::Left).0,
        }
    }

    /// Heading on top, then entries down the page; bullet items become
    /// spaced-out timeline entries
    fn timeline(&mut self, contents: &[Content<'_>]) -> Vec<(usize, RenderedBlock)> {
        let items = self.assign(contents, stack_bucket);
        let (heading, rest) = split_heading(&items);
        let (mut placed, top) = self.heading(heading, TextAlign::Left);
        let rect = self.rect;
        let gap = self.theme.spacing.block_gap;
        placed.extend(self.stack(&rest, rect.below(top), top, gap, TextAlign::Left).0);
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SlotContent;
    use crate::slide::ImageFit;

    // 10px per character at 20px
    fn mono() -> MonospaceMeasurer {
        MonospaceMeasurer::default()
    }

    fn text(id: &str, body: &str) -> TextBlock {
        TextBlock {
            id: id.into(),
            text: body.into(),
            style: None,
        }
    }

    fn image(id: &str) -> ImageBlock {
        ImageBlock {
            id: id.into(),
            src: format!("{id}.png"),
            alt: None,
            fit: ImageFit::Cover,
        }
    }

    fn rect() -> Frame {
        Frame::new(64, 64, 952, 952)
    }

    fn arrange(kind: LayoutKind, contents: &[Content<'_>]) -> Vec<RenderedBlock> {
        let theme = Theme::default();
        let layout = LayoutDefinition::new("l", kind);
        let mut measurer = mono();
        Arranger::new(&mut measurer, &theme, &layout, rect()).arrange(contents)
    }

    #[test]
    fn list_stacks_top_down() {
        let title = text("t", "Title");
        let body = text("b", "Body");
        let blocks = arrange(
            LayoutKind::List,
            &[
                Content::Text(TextRole::Title, &title),
                Content::Text(TextRole::Body, &body),
            ],
        );
        assert_eq!(blocks[0].frame, Frame::new(64, 64, 952, 72));
        // one h1 line plus the block gap
        assert_eq!(blocks[1].frame, Frame::new(64, 64 + 72 + 24, 952, 44));
        assert_eq!(blocks[0].style.as_ref().unwrap().font_size, Px(64.0));
        assert!(blocks.iter().all(|b| !b.overflow));
    }

    #[test]
    fn unknown_kind_arranges_like_list() {
        let title = text("t", "Title");
        let contents = [Content::Text(TextRole::Title, &title)];
        assert_eq!(
            arrange(LayoutKind::Unknown, &contents),
            arrange(LayoutKind::List, &contents)
        );
    }

    #[test]
    fn title_is_centred() {
        let title = text("t", "Hi");
        let blocks = arrange(LayoutKind::Title, &[Content::Text(TextRole::Title, &title)]);
        let frame = blocks[0].frame;
        // a single display line, 104 high, centred in 952
        assert_eq!(frame.h, Px(104.0));
        assert_eq!(frame.y, Px(64.0 + (952.0 - 104.0) / 2.0));
        assert_eq!(blocks[0].align, TextAlign::Center);
        assert_eq!(blocks[0].style.as_ref().unwrap().font_size, Px(96.0));
    }

    #[test]
    fn cover_sits_on_the_bottom() {
        let title = text("t", "Hi");
        let blocks = arrange(LayoutKind::Cover, &[Content::Text(TextRole::Title, &title)]);
        assert_eq!(blocks[0].frame.bottom(), rect().bottom());
        assert_eq!(blocks[0].align, TextAlign::Left);
    }

    #[test]
    fn slot_styles_apply_to_first_of_role() {
        let theme = Theme::default();
        let layout = LayoutDefinition::new("l", LayoutKind::List).with_slot(
            "body",
            SlotContent::Text,
            Some(StyleBucket::Quote),
        );
        let (a, b) = (text("a", "one"), text("b", "two"));
        let mut measurer = mono();
        let blocks = Arranger::new(&mut measurer, &theme, &layout, rect()).arrange(&[
            Content::Text(TextRole::Body, &a),
            Content::Text(TextRole::Body, &b),
        ]);
        assert_eq!(blocks[0].style.as_ref().unwrap().font_size, Px(48.0));
        assert_eq!(blocks[1].style.as_ref().unwrap().font_size, Px(32.0));
    }

    #[test]
    fn two_col_keeps_slide_order_with_images_right() {
        let (img, title, body) = (image("img"), text("t", "Title"), text("b", "Body"));
        let blocks = arrange(
            LayoutKind::TwoCol,
            &[
                Content::Image(&img),
                Content::Text(TextRole::Title, &title),
                Content::Text(TextRole::Body, &body),
            ],
        );
        let ids: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["img", "t", "b"]);

        let (left, right) = rect().split_columns(Px(48.0));
        assert_eq!(blocks[1].frame.w, rect().w);
        assert_eq!(blocks[2].frame.x, left.x);
        assert_eq!(blocks[0].frame.x, right.x);
        assert_eq!(blocks[0].frame.w, right.w);
        assert_eq!(blocks[0].frame.y, blocks[2].frame.y);
    }

    #[test]
    fn comparison_splits_by_count() {
        let blocks_in = [text("a", "A"), text("b", "B"), text("c", "C")];
        let contents: Vec<Content> = blocks_in
            .iter()
            .map(|b| Content::Text(TextRole::Body, b))
            .collect();
        let blocks = arrange(LayoutKind::Comparison, &contents);
        let (left, right) = rect().split_columns(Px(48.0));
        assert_eq!(blocks[0].frame.x, left.x);
        assert_eq!(blocks[1].frame.x, left.x);
        assert_eq!(blocks[2].frame.x, right.x);
        assert_eq!(blocks[2].frame.y, rect().y);
    }

    #[test]
    fn stat_uses_stat_bucket_then_caption() {
        let (title, number, label) = (text("t", "Growth"), text("n", "42%"), text("l", "year on year"));
        let blocks = arrange(
            LayoutKind::Stat,
            &[
                Content::Text(TextRole::Title, &title),
                Content::Text(TextRole::Body, &number),
                Content::Text(TextRole::Body, &label),
            ],
        );
        let size = |i: usize| blocks[i].style.as_ref().unwrap().font_size;
        assert_eq!(size(0), Px(44.0));
        assert_eq!(size(1), Px(160.0));
        assert_eq!(size(2), Px(22.0));
        assert_eq!(blocks[0].frame.y, rect().y);
        assert_eq!(blocks[2].frame.y, blocks[1].frame.bottom() + Px(32.0));
        assert_eq!(blocks[2].style.as_ref().unwrap().color, Theme::default().text_muted);
    }

    #[test]
    fn image_focus_puts_image_first() {
        let (title, img) = (text("t", "Caption"), image("img"));
        let blocks = arrange(
            LayoutKind::ImageFocus,
            &[Content::Text(TextRole::Title, &title), Content::Image(&img)],
        );
        assert_eq!(blocks[1].id, "img");
        assert_eq!(blocks[1].frame, Frame::new(64, 64, 952, 420));
        assert_eq!(blocks[0].frame.y, Px(64.0 + 420.0 + 24.0));
    }

    #[test]
    fn timeline_spaces_entries() {
        let bullets = BulletsBlock {
            id: "b".into(),
            bullets: vec!["one".into(), "two".into(), "three".into()],
            style: None,
        };
        let blocks = arrange(LayoutKind::Timeline, &[Content::Bullets(&bullets)]);
        let RenderedContent::Bullets { lines } = &blocks[0].content else {
            panic!("expected bullets");
        };
        assert_eq!(lines[0].marker.as_deref(), Some(TIMELINE_MARKER));
        assert_eq!(lines[1].y_offset, Px(44.0 + 12.0));
        assert_eq!(lines[2].y_offset, Px(88.0 + 24.0));
        assert_eq!(blocks[0].frame.h, Px(3.0 * 44.0 + 2.0 * 12.0));
    }

    #[test]
    fn section_break_inverts_text() {
        let title = text("t", "Part two");
        let blocks = arrange(LayoutKind::SectionBreak, &[Content::Text(TextRole::Title, &title)]);
        assert_eq!(
            blocks[0].style.as_ref().unwrap().color,
            Theme::default().colors.background
        );
    }

    #[test]
    fn overflow_is_clamped_and_flagged() {
        let long = "word ".repeat(400);
        let body = text("b", &long);
        let blocks = arrange(LayoutKind::List, &[Content::Text(TextRole::Body, &body)]);
        assert!(blocks[0].overflow);
        assert_eq!(blocks[0].frame.h, rect().h);
    }

    #[test]
    fn block_style_overrides() {
        let body = TextBlock {
            id: "b".into(),
            text: "shout".into(),
            style: Some(BlockStyle {
                color: Some(Colour::new_rgb(1, 2, 3)),
                font_family: Some("Mono".into()),
                text_align: Some(TextAlign::Right),
                uppercase: true,
            }),
        };
        let blocks = arrange(LayoutKind::List, &[Content::Text(TextRole::Body, &body)]);
        let style = blocks[0].style.as_ref().unwrap();
        assert_eq!(style.color, Colour::new_rgb(1, 2, 3));
        assert_eq!(style.font_family, "Mono");
        assert_eq!(blocks[0].align, TextAlign::Right);
        let RenderedContent::Text { lines, .. } = &blocks[0].content else {
            panic!("expected text");
        };
        assert_eq!(lines[0].text, "SHOUT");
    }
}
