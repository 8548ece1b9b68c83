// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::model::{Player, PlayerId};

/// A player with the first palette color at `position`.
#[must_use]
pub fn create_player(id: PlayerId, position: Point) -> Player {
    Player {
        id,
        x: position.x,
        y: position.y,
        color: 0,
    }
}

/// 2^53; every integer up to it is exact in an `f64`.
const MAX_EXACT_ID: f64 = 9_007_199_254_740_992.0;

/// The smallest integer above every numeric id in `players`, and at least 1.
///
/// Text ids that spell a number count; other text ids are ignored.
#[must_use]
pub fn generate_player_id(players: &[Player]) -> PlayerId {
    let max = players
        .iter()
        .filter_map(|p| p.id.as_number())
        .fold(0.0_f64, f64::max);
    let next = max.floor() + 1.0;
    if next <= MAX_EXACT_ID {
        #[expect(clippy::cast_possible_truncation, reason = "integral, 1 <= next <= 2^53")]
        let id = next as u64;
        PlayerId::from(id)
    } else {
        serde_json::Number::from_f64(next)
            .map_or_else(|| PlayerId::Text(next.to_string()), PlayerId::Number)
    }
}
