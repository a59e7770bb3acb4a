use crate::paint::Color;

use super::{Shape, SortKey, ZIndex};

/// A single display item: sort key + shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub key: SortKey,
    pub shape: Shape,
}

/// Retained display list for one frame of an in-process canvas.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DisplayList {
    background: Color,
    items: Vec<DisplayItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DisplayList {
    #[inline]
    pub fn new(background: Color) -> Self {
        Self { background, ..Self::default() }
    }

    /// Clears recorded items and sets the background. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self, background: Color) {
        self.background = background;
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Items in submission order.
    #[inline]
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items on layer `z`, in submission order.
    pub fn layer(&self, z: ZIndex) -> impl Iterator<Item = &DisplayItem> {
        self.items.iter().filter(move |item| item.key.z == z)
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, shape: Shape) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DisplayItem { key: SortKey::new(z, order), shape });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning shapes.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DisplayItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::Geometry;

    fn dot(x: f32) -> Shape {
        Shape::stroked(Geometry::Dot { center: Vec2::new(x, 0.0), diameter: 2.0 }, Color::WHITE, 1.0)
    }

    fn xs(list: &mut DisplayList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match item.shape.geometry {
                Geometry::Dot { center, .. } => center.x,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn paint_order_is_layer_then_submission() {
        let mut list = DisplayList::new(Color::BLACK);
        list.push(ZIndex::PRIMITIVES, dot(1.0));
        list.push(ZIndex(-10), dot(2.0));
        list.push(ZIndex::OVERLAY, dot(3.0));
        list.push(ZIndex(-10), dot(4.0));
        list.push(ZIndex::PRIMITIVES, dot(5.0));

        assert_eq!(xs(&mut list), vec![2.0, 4.0, 1.0, 5.0, 3.0]);
    }

    #[test]
    fn clear_resets_items_and_background() {
        let mut list = DisplayList::new(Color::BLACK);
        list.push(ZIndex::PRIMITIVES, dot(1.0));
        list.clear(Color::rgb(1, 2, 3));

        assert!(list.is_empty());
        assert_eq!(list.background(), Color::rgb(1, 2, 3));
        assert!(xs(&mut list).is_empty());

        list.push(ZIndex::PRIMITIVES, dot(7.0));
        assert_eq!(list.items()[0].key.order, 0);
    }

    #[test]
    fn layer_filter() {
        let mut list = DisplayList::new(Color::BLACK);
        list.push(ZIndex(-10), dot(1.0));
        list.push(ZIndex::PRIMITIVES, dot(2.0));
        list.push(ZIndex(-10), dot(3.0));
        assert_eq!(list.layer(ZIndex(-10)).count(), 2);
        assert_eq!(list.layer(ZIndex::OVERLAY).count(), 0);
    }
}
