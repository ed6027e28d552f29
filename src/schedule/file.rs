//! `serde`-derived JSON schedule file format.
//!
//! Mirrors [`super::Schedule`]'s fields as plain `Vec`s so a schedule compiler
//! (out of scope here) can hand the engine a finished plan as a file. Loading
//! rebuilds the intrusive `last`/`next` and `restrict_last`/`restrict_next`
//! linked lists from flat per-prefix / per-restriction arrays, then runs the
//! same validation the in-memory constructor does.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::Schedule;

/// One symmetry-breaking restriction: `a[depth] < a[index]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestrictionFile {
    pub depth: usize,
    pub index: usize,
}

/// The flat, file-friendly mirror of a [`Schedule`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleFile {
    pub size: usize,
    /// `loop_set_prefix_id[depth]`.
    pub loop_set_prefix_id: Vec<usize>,
    /// `prefix_father[k]`, `None` meaning "use `N(a[depth])` directly".
    pub prefix_father: Vec<Option<usize>>,
    /// Which depth each prefix is (re)built at (parallel to `prefix_father`).
    pub prefix_depth: Vec<usize>,
    pub restrictions: Vec<RestrictionFile>,
    pub in_exclusion_optimize_num: usize,
    pub in_exclusion_optimize_group: Vec<Vec<Vec<usize>>>,
    pub in_exclusion_optimize_val: Vec<i64>,
    pub redundancy: i64,
}

impl ScheduleFile {
    /// Parses a `ScheduleFile` from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse schedule JSON")
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize schedule JSON")
    }

    /// Compiles this file into an engine-facing [`Schedule`], rebuilding the
    /// intrusive rebuild-list and restriction-list representations and
    /// validating the result.
    pub fn compile(&self) -> Result<Schedule> {
        let m = self.prefix_father.len();
        if self.prefix_depth.len() != m {
            bail!(
                "prefix_depth has {} entries but prefix_father has {m}",
                self.prefix_depth.len()
            );
        }
        if self.loop_set_prefix_id.len() != self.size {
            bail!(
                "loop_set_prefix_id has {} entries but size is {}",
                self.loop_set_prefix_id.len(),
                self.size
            );
        }
        for &d in &self.prefix_depth {
            if d >= self.size {
                bail!("prefix_depth {d} out of range for size {}", self.size);
            }
        }
        for father in self.prefix_father.iter().flatten() {
            if *father >= m {
                bail!("prefix_father {father} out of range (m={m})");
            }
        }

        let mut last: Vec<Option<usize>> = vec![None; self.size];
        let mut next: Vec<Option<usize>> = vec![None; m];
        // Build each depth's list in prefix-id order so iteration order is
        // deterministic and matches array order.
        for prefix_id in (0..m).rev() {
            let depth = self.prefix_depth[prefix_id];
            next[prefix_id] = last[depth];
            last[depth] = Some(prefix_id);
        }

        let total_restrict = self.restrictions.len();
        let mut restrict_last: Vec<Option<usize>> = vec![None; self.size];
        let mut restrict_next: Vec<Option<usize>> = vec![None; total_restrict];
        let mut restrict_index: Vec<usize> = vec![0; total_restrict];
        for i in (0..total_restrict).rev() {
            let r = &self.restrictions[i];
            if r.depth >= self.size || r.index >= self.size {
                bail!("restriction {i} references out-of-range depth/index");
            }
            if r.index >= r.depth {
                bail!(
                    "restriction at depth {} must reference an index < depth, got {}",
                    r.depth,
                    r.index
                );
            }
            restrict_index[i] = r.index;
            restrict_next[i] = restrict_last[r.depth];
            restrict_last[r.depth] = Some(i);
        }

        Ok(Schedule::new(
            self.size,
            self.loop_set_prefix_id.clone(),
            self.prefix_father.clone(),
            last,
            next,
            restrict_last,
            restrict_next,
            restrict_index,
            self.in_exclusion_optimize_num,
            self.in_exclusion_optimize_group.clone(),
            self.in_exclusion_optimize_val.clone(),
            self.redundancy,
        ))
    }

    /// Loads and compiles a schedule from a JSON file on disk.
    pub fn load(path: &std::path::Path) -> Result<Schedule> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read schedule file {}", path.display()))?;
        Self::from_json(&text)?.compile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::presets;

    #[test]
    fn round_trips_triangle_schedule_through_json() {
        let original = presets::triangle();
        let file = ScheduleFile {
            size: original.size(),
            loop_set_prefix_id: (0..original.size())
                .map(|d| original.get_loop_set_prefix_id(d))
                .collect(),
            prefix_father: (0..original.get_total_prefix_num())
                .map(|k| original.get_father_prefix_id(k))
                .collect(),
            prefix_depth: vec![0, 1],
            restrictions: vec![],
            in_exclusion_optimize_num: original.get_in_exclusion_optimize_num(),
            in_exclusion_optimize_group: original.in_exclusion_optimize_group().to_vec(),
            in_exclusion_optimize_val: original.in_exclusion_optimize_val().to_vec(),
            redundancy: original.get_in_exclusion_optimize_redundancy(),
        };

        let json = file.to_json().unwrap();
        let reloaded = ScheduleFile::from_json(&json).unwrap().compile().unwrap();
        assert_eq!(reloaded.size(), original.size());
        assert_eq!(reloaded.get_total_prefix_num(), original.get_total_prefix_num());
        assert_eq!(
            reloaded.get_in_exclusion_optimize_redundancy(),
            original.get_in_exclusion_optimize_redundancy()
        );
    }

    #[test]
    fn rejects_restriction_referencing_its_own_depth_or_later() {
        let file = ScheduleFile {
            size: 3,
            loop_set_prefix_id: vec![0, 0, 0],
            prefix_father: vec![None],
            prefix_depth: vec![0],
            restrictions: vec![RestrictionFile { depth: 1, index: 1 }],
            in_exclusion_optimize_num: 0,
            in_exclusion_optimize_group: vec![],
            in_exclusion_optimize_val: vec![],
            redundancy: 1,
        };
        assert!(file.compile().is_err());
    }
}
