/// Filter token that disables type filtering.
pub const ALL_TYPES: &str = "all";

/// A selectable type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeChip {
    pub name: &'static str,
    pub glyph: &'static str,
}

pub const PRIMARY_TYPES: &[TypeChip] = &[
    TypeChip { name: ALL_TYPES, glyph: "⚡" },
    TypeChip { name: "fire", glyph: "🔥" },
    TypeChip { name: "water", glyph: "💧" },
    TypeChip { name: "grass", glyph: "🌿" },
    TypeChip { name: "electric", glyph: "⚡" },
];

/// Revealed on demand; purely additive to [`PRIMARY_TYPES`].
pub const SECONDARY_TYPES: &[TypeChip] = &[
    TypeChip { name: "psychic", glyph: "🔮" },
    TypeChip { name: "ice", glyph: "❄️" },
    TypeChip { name: "dragon", glyph: "🐉" },
    TypeChip { name: "dark", glyph: "🌑" },
    TypeChip { name: "fairy", glyph: "✨" },
];

/// Filters offered to the user given whether the secondary set is revealed.
pub fn visible_type_filters(show_more: bool) -> Vec<TypeChip> {
    let mut chips = PRIMARY_TYPES.to_vec();
    if show_more {
        chips.extend_from_slice(SECONDARY_TYPES);
    }
    chips
}

pub fn find_type_chip(name: &str) -> Option<TypeChip> {
    PRIMARY_TYPES
        .iter()
        .chain(SECONDARY_TYPES)
        .find(|chip| chip.name == name)
        .copied()
}
