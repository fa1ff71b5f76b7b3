//! Interactive shell over the intake form and patient list.

use std::io::Write;

use vet_tracker_core::form::{FormMode, PatientForm, SubmitOutcome};
use vet_tracker_core::models::InputKind;
use vet_tracker_core::notify::CollectingNotifier;
use vet_tracker_core::store::PatientStore;
use vet_tracker_core::view::{FormView, Header};
use vet_tracker_core::PatientExport;

use crate::command::{parse_command, Command, CommandError, ExportFormat, HELP};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The page shell: owns the store and drives the form.
pub struct Shell {
    store: PatientStore,
    form: PatientForm,
    toasts: CollectingNotifier,
    quiet: bool,
}

impl Shell {
    pub fn new(store: PatientStore, quiet: bool) -> Self {
        Self {
            store,
            form: PatientForm::new(),
            toasts: CollectingNotifier::new(),
            quiet,
        }
    }

    pub fn store(&self) -> &PatientStore {
        &self.store
    }

    pub fn form(&self) -> &PatientForm {
        &self.form
    }

    /// Prompt reflecting the form mode.
    pub fn prompt(&self) -> String {
        match self.form.mode(&self.store) {
            FormMode::Create => "new> ".to_string(),
            FormMode::Edit { id } => format!("edit {}> ", id),
        }
    }

    /// Print the page header.
    pub fn print_banner<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let title = Header::render();
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", "=".repeat(title.len()))?;
        writeln!(out, "Type `help` for commands.")?;
        Ok(())
    }

    /// Parse and run one input line. Parse errors are printed, not returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        match parse_command(line) {
            Ok(command) => self.execute(command, out),
            Err(CommandError::Empty) => Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "error: {}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<Flow> {
        match command {
            Command::Set { field, value } => {
                self.form.set_field(field, value);
            }
            Command::Show => self.render_form(out)?,
            Command::List => self.render_list(out)?,
            Command::Edit { id } => {
                if self.form.select_by_id(&mut self.store, &id) {
                    self.render_form(out)?;
                } else {
                    writeln!(out, "error: no patient with id {}", id)?;
                }
            }
            Command::Cancel => {
                self.form.cancel_edit(&mut self.store);
                writeln!(out, "Form cleared.")?;
            }
            Command::Submit => self.submit(out)?,
            Command::Delete { id } => match self.store.remove(&id) {
                Some(removed) => writeln!(out, "Deleted {} ({}).", removed.pet_name, removed.id)?,
                None => writeln!(out, "error: no patient with id {}", id)?,
            },
            Command::Export(ExportFormat::Json) => {
                let export = PatientExport::from_store(&self.store);
                writeln!(out, "{}", export.to_json()?)?;
            }
            Command::Export(ExportFormat::Csv) => {
                let export = PatientExport::from_store(&self.store);
                write!(out, "{}", export.to_csv())?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn submit<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        match self.form.submit(&mut self.store, &self.toasts) {
            Ok(SubmitOutcome::UpdateMissed(record)) => {
                writeln!(
                    out,
                    "warning: patient {} no longer exists; submit again to add it as new.",
                    record.id
                )?;
            }
            Ok(_) => {}
            Err(_) => {
                // The banner is part of the form view
                self.render_form(out)?;
            }
        }

        for toast in self.toasts.drain() {
            if !self.quiet {
                writeln!(out, "✔ {}", toast.title)?;
            }
        }
        Ok(())
    }

    fn render_form<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let view = FormView::new(&self.form, &self.store);

        writeln!(out, "{} - {}", view.heading, view.tagline)?;
        if let Some(error) = view.error {
            writeln!(out, "  * {}", error)?;
        }
        for field in &view.fields {
            let value = if field.value.is_empty() {
                format!("({})", field.placeholder)
            } else if field.kind == InputKind::MultiLine {
                field.value.replace('\n', "\n    ")
            } else {
                field.value.clone()
            };
            writeln!(out, "  {:<11} {}", format!("{}:", field.label), value)?;
        }
        writeln!(out, "  [{}]", view.submit_label)?;
        Ok(())
    }

    fn render_list<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        if self.store.is_empty() {
            writeln!(out, "No patients yet.")?;
            return Ok(());
        }

        let editing = self.store.selection().map(|s| s.id.as_str());
        for patient in self.store.records() {
            let marker = if editing == Some(patient.id.as_str()) { "*" } else { " " };
            writeln!(
                out,
                "{} {}  {} (owner: {}, {})  admitted {}  symptoms: {}",
                marker,
                patient.id,
                patient.pet_name,
                patient.owner_name,
                patient.email,
                patient.admission_date,
                patient.symptoms,
            )?;
        }
        Ok(())
    }
}
