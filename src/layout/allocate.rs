use crate::layout::bound::AxisBound;

/// Turn one axis worth of distilled preferences into concrete track sizes.
///
/// The result has one entry per preference and sums as close to `extent` as
/// the constraints allow, using exact integer arithmetic and left-to-right
/// tie-breaking:
///
/// 1. Floor pass: every track takes its minimum, left to right, capped by
///    the unspent remainder. When the extent cannot cover the minimums the
///    trailing tracks are squeezed below them; a too-small viewport is an
///    expected runtime condition, not an error.
/// 2. Expansion pass: the remainder is offered in even shares to every track
///    whose target (preferred, else maximum when no preferred is declared)
///    is unmet. Tracks reaching a maximum target close and absorb nothing
///    further; tracks with a preferred stop there and only grow past it in
///    the grow pass.
/// 3. Grow pass: whatever is left splits evenly across open growers, tracks
///    that either request grow or declare no maximum, capped at their
///    maximum when one exists.
/// 4. Remainder pass: division leftovers go one unit at a time, left to
///    right, to growers that can still absorb, so the output sums to
///    `extent` exactly whenever an uncapped grower exists. With no grower
///    the excess is simply not distributed.
pub fn allocate(prefs: &[AxisBound], extent: u16) -> Vec<u16> {
    let n = prefs.len();
    if n == 0 {
        return Vec::new();
    }

    let mut dims = vec![0u16; n];
    let mut remainder = extent;

    // Floor pass.
    for (dim, pref) in dims.iter_mut().zip(prefs) {
        if pref.min > 0 {
            let take = pref.min.min(remainder);
            *dim = take;
            remainder -= take;
            if remainder == 0 {
                return dims;
            }
        }
    }

    // Tracks that reached a maximum target and are done for good.
    let mut closed = vec![false; n];
    let target = |pref: &AxisBound| -> Option<u16> {
        if pref.preferred > 0 {
            Some(pref.preferred)
        } else if pref.max > 0 {
            Some(pref.max)
        } else {
            None
        }
    };

    // Expansion pass.
    while remainder > 0 {
        let takers: Vec<usize> = (0..n)
            .filter(|&i| !closed[i] && target(&prefs[i]).is_some_and(|t| dims[i] < t))
            .collect();
        if takers.is_empty() {
            break;
        }
        let live = closed.iter().filter(|done| !**done).count() as u16;
        let share = remainder / live.max(1);
        if share == 0 {
            // Less than one unit per live track: hand out single units and
            // let the grow pass pick up anything left.
            for &i in &takers {
                if remainder == 0 {
                    break;
                }
                dims[i] += 1;
                remainder -= 1;
            }
            break;
        }
        for &i in &takers {
            let goal = target(&prefs[i]).unwrap_or(0);
            let take = (goal - dims[i]).min(share).min(remainder);
            dims[i] += take;
            remainder -= take;
            if prefs[i].preferred == 0 && prefs[i].max > 0 && dims[i] >= prefs[i].max {
                closed[i] = true;
            }
        }
    }

    let open_grower = |i: usize, dims: &[u16], closed: &[bool]| -> bool {
        !closed[i]
            && (prefs[i].grow || prefs[i].max == 0)
            && (prefs[i].max == 0 || dims[i] < prefs[i].max)
    };

    // Grow pass.
    while remainder > 0 {
        let growers: Vec<usize> = (0..n).filter(|&i| open_grower(i, &dims, &closed)).collect();
        if growers.is_empty() {
            break;
        }
        let share = remainder / growers.len() as u16;
        if share == 0 {
            break;
        }
        for &i in &growers {
            let room = if prefs[i].max > 0 {
                prefs[i].max - dims[i]
            } else {
                u16::MAX - dims[i]
            };
            let take = share.min(room).min(remainder);
            dims[i] += take;
            remainder -= take;
            if prefs[i].max > 0 && dims[i] >= prefs[i].max {
                closed[i] = true;
            }
        }
    }

    // Remainder pass.
    while remainder > 0 {
        let mut progressed = false;
        for i in 0..n {
            if remainder == 0 {
                break;
            }
            if !open_grower(i, &dims, &closed) {
                continue;
            }
            dims[i] += 1;
            remainder -= 1;
            progressed = true;
        }
        if !progressed {
            break;
        }
    }

    dims
}
