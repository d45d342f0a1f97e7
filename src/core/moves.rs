/// One showcased move. `key` is written to the figure's `data-move` attribute
/// so the stylesheet can pick the matching pose animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub note: &'static str,
}

pub const MOVES: &[MoveEntry] = &[
    MoveEntry {
        key: "aerial-kick",
        title: "腾空飞踢 — Aerial Flying Kick",
        description: "Explosive takeoff, knee chamber, extension at apex, controlled landing.",
        note: "Emphasis: straight-line extension, stable core, quiet landing mechanics.",
    },
    MoveEntry {
        key: "tornado-kick",
        title: "旋风腿 — Tornado Kick",
        description: "Step-in, rotational lift, whipping extension, re-spot on descent.",
        note: "Emphasis: turn speed from hips, head spotting, crisp re-alignment.",
    },
    MoveEntry {
        key: "crane-stance",
        title: "鹤形起势 — Crane Stance Entry",
        description: "One-leg balance, lifted knee line, open guard, poised breath.",
        note: "Emphasis: vertical structure, relaxed shoulders, rooted supporting foot.",
    },
    MoveEntry {
        key: "fish-flip",
        title: "鱼跃翻身 — Fish-Leap Flip",
        description: "Forward dive line into a compact rotation, open to a soft recovery.",
        note: "Emphasis: tight tuck timing, safe shoulder path, clean exit posture.",
    },
];

/// Cyclic state machine over an immutable move catalogue.
///
/// Only the index is mutable. It starts at 0 and advances modulo the
/// catalogue length on every timer transition; there is no terminal state.
#[derive(Clone, Debug)]
pub struct MoveCycle {
    catalogue: &'static [MoveEntry],
    index: usize,
}

impl Default for MoveCycle {
    fn default() -> Self {
        Self::new(MOVES)
    }
}

impl MoveCycle {
    /// An empty catalogue falls back to the built-in one.
    pub fn new(catalogue: &'static [MoveEntry]) -> Self {
        let catalogue = if catalogue.is_empty() { MOVES } else { catalogue };
        Self {
            catalogue,
            index: 0,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.catalogue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.catalogue.is_empty()
    }

    #[inline]
    pub fn current(&self) -> &'static MoveEntry {
        &self.catalogue[self.index]
    }

    /// Jump to `index` (wrapped into range) and return the active entry.
    pub fn set(&mut self, index: usize) -> &'static MoveEntry {
        self.index = index % self.catalogue.len();
        self.current()
    }

    /// Timer transition: `(current + 1) mod N`.
    pub fn advance(&mut self) -> &'static MoveEntry {
        self.set(self.index + 1)
    }
}
