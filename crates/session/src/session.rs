//! Editor session over a retention ladder

use crate::draft::Draft;
use crate::environment::EnvironmentCatalog;
use crate::error::{Result, SessionError};
use crate::submit::{ScheduleSubmitter, SubmitReceipt};
use ladder_core::{EditError, Ladder, RowSpec, SchedulePayload, TimeUnit, ValidationError};

/// Minimum length of an id prefix used as a row reference
const MIN_ID_PREFIX: usize = 4;

/// What an accepted edit did to the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The ladder was replaced
    Changed,
    /// The edit clamped back to the current value
    Unchanged,
}

/// One editor's state: the ladder being built and the label it goes under
///
/// The session is the only writer of its ladder. Nothing leaves it until
/// [`Session::confirm`] hands a validated payload to a submitter.
#[derive(Debug, Clone)]
pub struct Session {
    ladder: Ladder,
    label: String,
    catalog: EnvironmentCatalog,
}

impl Session {
    /// Start a new session from the default ladder
    pub fn open(catalog: EnvironmentCatalog, label: &str) -> Result<Self> {
        let label = catalog.resolve(label)?;
        tracing::debug!(%label, "opened ladder session");
        Ok(Self {
            ladder: Ladder::with_defaults(),
            label,
            catalog,
        })
    }

    /// Continue from a saved draft
    ///
    /// A draft that breaks a ladder rule still loads so it can be repaired;
    /// the problem is logged and reported by [`Session::validation`].
    pub fn resume(catalog: EnvironmentCatalog, draft: Draft) -> Result<Self> {
        let label = catalog.resolve(&draft.label)?;
        if let Err(e) = draft.rows.validate() {
            tracing::warn!(error = %e, "resumed draft does not validate");
        }
        Ok(Self {
            ladder: draft.rows,
            label,
            catalog,
        })
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn catalog(&self) -> &EnvironmentCatalog {
        &self.catalog
    }

    pub fn to_draft(&self) -> Draft {
        Draft::new(self.label.clone(), self.ladder.clone())
    }

    pub fn set_label(&mut self, label: &str) -> Result<()> {
        self.label = self.catalog.resolve(label)?;
        Ok(())
    }

    /// Throw away all edits and start over from the defaults
    pub fn reset(&mut self) {
        self.ladder = Ladder::with_defaults();
        tracing::debug!("reset ladder to defaults");
    }

    /// Resolve a row reference to an index
    ///
    /// Supports:
    /// - 1-based position: "2"
    /// - Full row id
    /// - Id prefix of at least four characters (must be unique)
    pub fn resolve_row(&self, reference: &str) -> Result<usize> {
        let reference = reference.trim();

        if let Ok(position) = reference.parse::<usize>() {
            if (1..=self.ladder.len()).contains(&position) {
                return Ok(position - 1);
            }
        }

        if reference.len() >= MIN_ID_PREFIX {
            let prefix = reference.to_ascii_uppercase();
            let matching: Vec<usize> = self
                .ladder
                .iter()
                .enumerate()
                .filter(|(_, row)| row.id.to_string().starts_with(&prefix))
                .map(|(index, _)| index)
                .collect();

            match matching.len() {
                1 => return Ok(matching[0]),
                0 => {}
                matches => {
                    return Err(SessionError::AmbiguousRowRef {
                        reference: reference.to_string(),
                        matches,
                    })
                }
            }
        }

        Err(SessionError::UnknownRowRef(reference.to_string()))
    }

    pub fn set_every(&mut self, index: usize, every: u32) -> Result<EditOutcome> {
        let next = self.ladder.try_set_every(index, every);
        self.apply("set_every", next)
    }

    pub fn set_unit(&mut self, index: usize, unit: TimeUnit) -> Result<EditOutcome> {
        let next = self.ladder.try_set_unit(index, unit);
        self.apply("set_unit", next)
    }

    pub fn adjust_repeat(&mut self, index: usize, delta: i64) -> Result<EditOutcome> {
        let next = self.ladder.try_adjust_repeat(index, delta);
        self.apply("adjust_repeat", next)
    }

    pub fn remove_row(&mut self, index: usize) -> Result<EditOutcome> {
        let row = self.ladder.get(index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.ladder.len(),
        })?;
        let next = self.ladder.try_remove_row(row.id);
        self.apply("remove_row", next)
    }

    /// Append the suggested next row and return what was added
    pub fn add_row(&mut self) -> Result<RowSpec> {
        let next = self.ladder.try_append_suggested();
        self.apply("add_row", next)?;
        let added = self
            .ladder
            .rows()
            .last()
            .map(|row| row.spec())
            .ok_or(EditError::CapacityExhausted)?;
        Ok(added)
    }

    pub fn validation(&self) -> std::result::Result<(), ValidationError> {
        self.ladder.validate()
    }

    /// The payload `confirm` would submit
    pub fn payload(&self) -> Result<SchedulePayload> {
        Ok(SchedulePayload::from_ladder(self.label.clone(), &self.ladder)?)
    }

    /// Validate and hand the ladder to `submitter`
    pub async fn confirm<S>(&self, submitter: &S) -> Result<SubmitReceipt>
    where
        S: ScheduleSubmitter + ?Sized,
    {
        let payload = self.payload()?;
        let receipt = submitter.submit(&payload).await?;
        tracing::info!(id = %receipt.id, label = %receipt.label, rows = receipt.rows, "schedule submitted");
        Ok(receipt)
    }

    /// End the session without submitting
    pub fn cancel(self) {
        tracing::debug!(rows = self.ladder.len(), "cancelled ladder session");
    }

    fn apply(
        &mut self,
        edit: &'static str,
        next: std::result::Result<Ladder, EditError>,
    ) -> Result<EditOutcome> {
        match next {
            Ok(next) if Ladder::ptr_eq(&self.ladder, &next) => {
                tracing::debug!(edit, "edit left ladder unchanged");
                Ok(EditOutcome::Unchanged)
            }
            Ok(next) => {
                self.ladder = next;
                tracing::debug!(edit, rows = self.ladder.len(), total = self.ladder.total_repeat(), "edit applied");
                Ok(EditOutcome::Changed)
            }
            Err(e) => {
                tracing::debug!(edit, error = %e, "edit rejected");
                Err(e.into())
            }
        }
    }
}
