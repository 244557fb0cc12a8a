//! Ordered, visibility-aware container backing each panel.

use crate::entry::{Entry, EntryKind};

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Display order is vector order. Moves step one slot with wraparound and,
/// while `edit_mode` is off, skip over hidden entries so a move always lands
/// next to something the user can see.
#[derive(Clone, Debug, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
    pub edit_mode: bool,
}

impl EntryList {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        EntryList {
            entries,
            edit_mode: false,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn move_up(&mut self, index: usize) {
        self.shift(index, Direction::Up);
    }

    pub fn move_down(&mut self, index: usize) {
        self.shift(index, Direction::Down);
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.visible = visible;
        }
    }

    /// Drops every collected entry, keeping user notes in place. Fresh
    /// collection results are pushed after the survivors.
    pub fn clear_collected(&mut self) {
        self.entries.retain(|e| e.kind == EntryKind::UserData);
    }

    fn shift(&mut self, index: usize, dir: Direction) {
        if index >= self.entries.len() {
            return;
        }
        let entry = self.entries.remove(index);
        let end = self.entries.len();

        let mut target = match dir {
            Direction::Up => {
                if index == 0 {
                    end
                } else {
                    index - 1
                }
            }
            Direction::Down => {
                if index + 1 > end {
                    0
                } else {
                    index + 1
                }
            }
        };

        // Walk past hidden slots until the scan returns to the removal
        // point or hits the raw wrap boundary.
        match dir {
            Direction::Up => {
                while target != index
                    && target != end
                    && !self.entries[target].visible
                    && !self.edit_mode
                {
                    if target == 0 {
                        target = end;
                    } else {
                        target -= 1;
                    }
                }
            }
            Direction::Down => {
                while target != index
                    && target != 0
                    && !self.entries[target - 1].visible
                    && !self.edit_mode
                {
                    target += 1;
                    if target > end {
                        target = 0;
                    }
                }
            }
        }

        self.entries.insert(target, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(list: &EntryList) -> Vec<EntryKind> {
        list.entries().iter().map(|e| e.kind).collect()
    }

    fn five_visible() -> EntryList {
        EntryList::from_entries(vec![
            Entry::collected(EntryKind::Cpu, 0),
            Entry::collected(EntryKind::Gpu, 0),
            Entry::collected(EntryKind::Ram, 0),
            Entry::collected(EntryKind::Disk, 0),
            Entry::collected(EntryKind::Motherboard, 0),
        ])
    }

    #[test]
    fn move_up_steps_one_slot() {
        let mut list = five_visible();
        list.move_up(2);
        assert_eq!(
            kinds(&list),
            vec![
                EntryKind::Cpu,
                EntryKind::Ram,
                EntryKind::Gpu,
                EntryKind::Disk,
                EntryKind::Motherboard,
            ]
        );
    }

    #[test]
    fn move_down_from_last_wraps_to_front() {
        let mut list = five_visible();
        list.move_down(4);
        assert_eq!(kinds(&list)[0], EntryKind::Motherboard);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn move_up_from_first_wraps_to_back() {
        let mut list = five_visible();
        list.move_up(0);
        assert_eq!(kinds(&list)[4], EntryKind::Cpu);
    }

    #[test]
    fn move_up_skips_hidden_neighbours() {
        let mut list = EntryList::from_entries(vec![
            Entry::collected(EntryKind::Cpu, 0),
            Entry::collected(EntryKind::Gpu, 0),
            Entry::collected(EntryKind::Ram, 0),
        ]);
        list.set_visible(1, false);
        list.move_up(2);
        // Ram jumps over the hidden Gpu to land in front of Cpu.
        assert_eq!(
            kinds(&list),
            vec![EntryKind::Ram, EntryKind::Cpu, EntryKind::Gpu]
        );
    }

    #[test]
    fn move_down_skips_hidden_neighbours() {
        let mut list = EntryList::from_entries(vec![
            Entry::collected(EntryKind::Cpu, 0),
            Entry::collected(EntryKind::Gpu, 0),
            Entry::collected(EntryKind::Ram, 0),
        ]);
        list.set_visible(1, false);
        list.move_down(0);
        // Cpu jumps over the hidden Gpu to land after Ram.
        assert_eq!(
            kinds(&list),
            vec![EntryKind::Gpu, EntryKind::Ram, EntryKind::Cpu]
        );
    }

    #[test]
    fn edit_mode_moves_ignore_visibility() {
        let mut list = EntryList::from_entries(vec![
            Entry::collected(EntryKind::Cpu, 0),
            Entry::collected(EntryKind::Gpu, 0),
            Entry::collected(EntryKind::Ram, 0),
        ]);
        list.set_visible(1, false);
        list.edit_mode = true;
        list.move_up(2);
        assert_eq!(
            kinds(&list),
            vec![EntryKind::Cpu, EntryKind::Ram, EntryKind::Gpu]
        );
    }

    #[test]
    fn move_with_everything_else_hidden_returns_to_place() {
        let mut list = EntryList::from_entries(vec![
            Entry::collected(EntryKind::Cpu, 0),
            Entry::collected(EntryKind::Gpu, 0),
            Entry::collected(EntryKind::Ram, 0),
        ]);
        list.set_visible(0, false);
        list.set_visible(1, false);
        list.move_up(2);
        // The scan completes a full circle and re-inserts at the wrap end.
        assert_eq!(
            kinds(&list),
            vec![EntryKind::Cpu, EntryKind::Gpu, EntryKind::Ram]
        );
    }

    #[test]
    fn out_of_range_move_is_a_no_op() {
        let mut list = five_visible();
        let before = kinds(&list);
        list.move_up(5);
        list.move_down(99);
        assert_eq!(kinds(&list), before);
    }

    #[test]
    fn set_visible_never_reorders() {
        let mut list = five_visible();
        let before = kinds(&list);
        list.set_visible(1, false);
        list.set_visible(3, false);
        assert_eq!(kinds(&list), before);
        assert!(!list.entries()[1].visible);
    }

    #[test]
    fn set_visible_flips_the_flag_both_ways() {
        let mut list = five_visible();
        list.set_visible(2, false);
        assert!(!list.entries()[2].visible);
        list.set_visible(2, true);
        assert!(list.entries()[2].visible);
        // Out of range is ignored.
        list.set_visible(99, false);
    }

    #[test]
    fn clear_collected_keeps_only_user_notes() {
        let mut list = EntryList::from_entries(vec![
            Entry::collected(EntryKind::Cpu, 0),
            Entry::note("Note", "text"),
        ]);
        list.clear_collected();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].kind, EntryKind::UserData);
    }

    #[test]
    fn moves_preserve_relative_order_of_the_rest() {
        let mut list = five_visible();
        list.move_up(3);
        assert_eq!(
            kinds(&list),
            vec![
                EntryKind::Cpu,
                EntryKind::Gpu,
                EntryKind::Disk,
                EntryKind::Ram,
                EntryKind::Motherboard,
            ]
        );
    }
}
