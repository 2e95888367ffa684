use crate::model::StaffMember;
use crate::roster::{Roster, RosterError};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashSet;
use std::path::Path;

/// Personne à enregistrer, lue depuis CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRecord {
    pub given_name: String,
    pub family_name: String,
}

/// Import du personnel depuis CSV: header `given_name,family_name`
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffRecord>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let given = rec.get(0).context("missing given_name")?.trim();
        let family = rec.get(1).context("missing family_name")?.trim();
        if given.is_empty() || family.is_empty() {
            bail!("invalid staff row (empty name)");
        }
        out.push(StaffRecord {
            given_name: given.to_string(),
            family_name: family.to_string(),
        });
    }
    Ok(out)
}

/// Enregistre tout le lot, ou rien : les noms vides et les doublons (dans
/// le lot ou déjà au roster) sont refusés avant le premier enregistrement.
pub fn register_staff_records(roster: &mut Roster, records: &[StaffRecord]) -> anyhow::Result<()> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    for rec in records {
        let full_name = format!("{} {}", rec.given_name, rec.family_name);
        let check = if rec.given_name.is_empty() || rec.family_name.is_empty() {
            Err(RosterError::InvalidStaffName)
        } else if roster.find_staff(&full_name).is_some()
            || !seen.insert(full_name.to_lowercase())
        {
            Err(RosterError::DuplicateStaff(full_name.clone()))
        } else {
            Ok(())
        };
        check.with_context(|| format!("registering {full_name}"))?;
    }

    for rec in records {
        roster
            .register_staff(&rec.given_name, &rec.family_name)
            .with_context(|| format!("registering {} {}", rec.given_name, rec.family_name))?;
    }
    log_event!(info, count = records.len(), "staff imported");
    Ok(())
}

/// Export CSV des shifts de la semaine:
/// header `day,start,end,minimum_workers,manager,workers`
///
/// `workers` est une liste de noms complets séparés par `;`.
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut w = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["day", "start", "end", "minimum_workers", "manager", "workers"])?;
    for shift in roster.week_shifts() {
        let range = shift.range();
        let manager = shift
            .manager()
            .and_then(|id| roster.staff_member(id))
            .map(StaffMember::full_name)
            .unwrap_or_default();
        let workers: Vec<String> = shift
            .workers()
            .iter()
            .filter_map(|id| roster.staff_member(*id))
            .map(StaffMember::full_name)
            .collect();
        w.write_record([
            shift.day().name().to_string(),
            crate::time::format_clock(range.start()),
            crate::time::format_clock(range.end()),
            shift.minimum_workers().to_string(),
            manager,
            workers.join(";"),
        ])?;
    }
    w.flush()?;
    Ok(())
}
