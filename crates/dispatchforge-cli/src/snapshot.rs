//! Snapshot ingestion.
//!
//! Reads a JSON snapshot in the backend's field naming and converts it
//! into validated domain values. `-1` codes become absent values.

use std::collections::HashSet;
use std::path::Path;

use dispatchforge::{
    Category, Comparison, ConstraintSet, DispatchForgeError, MissionTier, Requirement, Resource,
    Slot, SlotGroup, Tier,
};
use serde::Deserialize;
use thiserror::Error;

/// Snapshot error
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DispatchForgeError),

    #[error("duplicate resource id {0} in pool")]
    DuplicateResource(u64),
}

const ABSENT: i64 = -1;

fn absent() -> i64 {
    ABSENT
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    heroes: Vec<RawHero>,
    #[serde(default)]
    lands: Vec<RawLand>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHero {
    token_id: u64,
    #[serde(default)]
    grade: i64,
    #[serde(default)]
    name: String,
    #[serde(default = "absent")]
    race: i64,
    #[serde(default)]
    star: i64,
    #[serde(default = "absent")]
    primal_type: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLand {
    token_id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    buildings: Vec<RawBuilding>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBuilding {
    building_type: i64,
    #[serde(default)]
    grade: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    heroz_list: Vec<RawHero>,
    #[serde(default)]
    pending_reward: bool,
    #[serde(default)]
    missions: Vec<RawMission>,
    #[serde(default)]
    remain_count: i64,
    #[serde(default)]
    reward_amount: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMission {
    #[serde(default)]
    title: String,
    #[serde(default = "absent")]
    create_type: i64,
    #[serde(default = "absent")]
    heroz_grade: i64,
    #[serde(default = "absent")]
    heroz_grade_type: i64,
    #[serde(default = "absent")]
    heroz_race: i64,
    #[serde(default = "absent")]
    heroz_star: i64,
    #[serde(default = "absent")]
    heroz_star_type: i64,
    #[serde(default)]
    boost_condition_count: i64,
    #[serde(default)]
    buff_amount: i64,
}

/// Planner input read from a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub groups: Vec<SlotGroup>,
    pub pool: Vec<Resource>,
}

impl Snapshot {
    /// Reads and converts a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Converts a snapshot from a JSON string.
    ///
    /// Fails on unknown codes, out-of-range values and duplicate pool ids.
    pub fn from_json_str(s: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(s)?;

        let mut seen = HashSet::new();
        let mut pool = Vec::with_capacity(raw.heroes.len());
        for hero in &raw.heroes {
            if !seen.insert(hero.token_id) {
                return Err(SnapshotError::DuplicateResource(hero.token_id));
            }
            pool.push(resource(hero)?);
        }

        let groups = raw
            .lands
            .iter()
            .map(group)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { groups, pool })
    }
}

fn small(field: &str, value: i64) -> Result<u8, DispatchForgeError> {
    u8::try_from(value)
        .map_err(|_| DispatchForgeError::DomainModel(format!("{field} out of range: {value}")))
}

fn requirement(
    field: &str,
    value: i64,
    comparison: i64,
) -> Result<Option<Requirement>, DispatchForgeError> {
    if value == ABSENT {
        return Ok(None);
    }
    Ok(Some(Requirement {
        value: small(field, value)?,
        comparison: Comparison::from_code(comparison),
    }))
}

fn resource(raw: &RawHero) -> Result<Resource, DispatchForgeError> {
    let mut resource = Resource::new(raw.token_id, small("grade", raw.grade)?)
        .with_sub_tier(small("star", raw.star)?)
        .with_name(raw.name.clone());
    resource.category = Category::from_code(raw.race)?;
    resource.tier = Tier::from_code(raw.primal_type)?;
    Ok(resource)
}

fn constraint(raw: &RawMission) -> Result<ConstraintSet, DispatchForgeError> {
    let mut set = ConstraintSet::new(raw.title.clone(), clamp_u32(raw.boost_condition_count));
    set.tier = MissionTier::from_code(raw.create_type)?;
    set.grade = requirement("herozGrade", raw.heroz_grade, raw.heroz_grade_type)?;
    set.category = Category::from_code(raw.heroz_race)?;
    set.sub_tier = requirement("herozStar", raw.heroz_star, raw.heroz_star_type)?;
    set.buff_amount = clamp_u32(raw.buff_amount);
    Ok(set)
}

fn slot(raw: &RawBuilding) -> Result<Slot, DispatchForgeError> {
    let assigned = raw
        .heroz_list
        .iter()
        .map(resource)
        .collect::<Result<Vec<_>, _>>()?;
    let mut slot = Slot::new(raw.building_type, small("building grade", raw.grade)?, &raw.name)
        .with_pending_reward(raw.pending_reward)
        .with_assigned(assigned);
    for mission in &raw.missions {
        slot = slot.with_constraint(constraint(mission)?);
    }
    slot.remaining_runs = clamp_u32(raw.remain_count);
    slot.reward_amount = raw.reward_amount.max(0) as u64;
    Ok(slot)
}

fn group(raw: &RawLand) -> Result<SlotGroup, DispatchForgeError> {
    let mut group = SlotGroup::new(raw.token_id, raw.name.clone());
    for building in &raw.buildings {
        group = group.with_slot(slot(building)?);
    }
    Ok(group)
}

// Negative counts read as zero.
fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
