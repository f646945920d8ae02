//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Improvement Point budget and progressive cost.
//!
//! ## Equations
//! IP(L) = Σ (10l - 5) for l = 2..=L = 5L² - 5
//!
//! Cost(c, t) = Σ v for v = c+1..=t

/// Triangular number n(n+1)/2 for n >= 0.
fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// Total IP granted by reaching `level`.
///
/// Levels of 1 and below grant nothing. Saturates at `i64::MAX - 5` for
/// levels past roughly 1.36 billion.
pub fn total_ip_at_level(level: i32) -> i64 {
    let level = i64::from(level);
    if level <= 1 {
        return 0;
    }
    level.saturating_mul(level).saturating_mul(5) - 5
}

/// IP needed to raise a value from `current` to `target`, where raising
/// from v-1 to v costs v.
///
/// Negative inputs count as zero. Lowering costs nothing.
pub fn cost_to_raise(current: i32, target: i32) -> i64 {
    let current = i64::from(current.max(0));
    let target = i64::from(target.max(0));
    if target <= current {
        return 0;
    }
    triangular(target) - triangular(current)
}

/// Highest value reachable from `current` by buying one point at a time
/// while `available` IP lasts.
pub fn max_reachable(current: i32, available: i64) -> i32 {
    let current = current.max(0);
    let available = available.max(0);
    // Largest t with T(t) <= T(current) + available, solved approximately and
    // then corrected in unit steps.
    let budget = (triangular(i64::from(current)) as f64) + (available as f64);
    let estimate = ((8.0 * budget + 1.0).sqrt() - 1.0) / 2.0;
    let mut target = (estimate.floor() as i64).clamp(i64::from(current), i64::from(i32::MAX));
    while target > i64::from(current) && cost_to_raise(current, target as i32) > available {
        target -= 1;
    }
    while target < i64::from(i32::MAX) && cost_to_raise(current, (target + 1) as i32) <= available {
        target += 1;
    }
    target as i32
}
