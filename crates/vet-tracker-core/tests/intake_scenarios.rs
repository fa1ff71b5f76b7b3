//! End-to-end intake form scenarios.

use vet_tracker_core::form::{FormMode, PatientForm, SubmitOutcome};
use vet_tracker_core::models::{Field, PatientDraft, PatientRecord};
use vet_tracker_core::notify::{CollectingNotifier, NoopNotifier};
use vet_tracker_core::store::PatientStore;

fn make_record(id: &str) -> PatientRecord {
    PatientRecord {
        id: id.to_string(),
        pet_name: "Rex".to_string(),
        owner_name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        admission_date: "2024-01-01".to_string(),
        symptoms: "cough".to_string(),
    }
}

fn fill(form: &mut PatientForm, values: [&str; 5]) {
    for (field, value) in Field::ALL.into_iter().zip(values) {
        form.set_field(field, value);
    }
}

#[test]
fn test_create_new_patient() {
    let mut form = PatientForm::new();
    let mut store = PatientStore::new();
    fill(&mut form, ["Rex", "Ana", "ana@x.com", "2024-01-01", "cough"]);

    let outcome = form.submit(&mut store, &NoopNotifier).unwrap();

    assert_eq!(store.len(), 1);
    let created = &store.records()[0];
    assert_eq!(created, outcome.record());
    assert!(!created.id.is_empty());
    assert_eq!(created.pet_name, "Rex");
    assert_eq!(created.owner_name, "Ana");
    assert_eq!(created.email, "ana@x.com");
    assert_eq!(created.admission_date, "2024-01-01");
    assert_eq!(created.symptoms, "cough");

    assert!(form.draft().is_blank());
    assert_eq!(form.mode(&store), FormMode::Create);
}

#[test]
fn test_edit_existing_patient() {
    let mut form = PatientForm::new();
    let mut store =
        PatientStore::try_with_records(vec![make_record("zzz"), make_record("abc")]).unwrap();

    assert!(form.select_by_id(&mut store, "abc"));
    form.set_field(Field::Symptoms, "fever");

    let outcome = form.submit(&mut store, &NoopNotifier).unwrap();
    assert!(matches!(outcome, SubmitOutcome::Updated(_)));

    let updated = store.get("abc").unwrap();
    assert_eq!(updated.symptoms, "fever");
    assert_eq!(updated.pet_name, "Rex");
    assert_eq!(updated.owner_name, "Ana");
    assert_eq!(updated.email, "ana@x.com");
    assert_eq!(updated.admission_date, "2024-01-01");

    // Order and neighbours untouched
    assert_eq!(store.records()[0], make_record("zzz"));
    assert_eq!(store.records()[1].id, "abc");

    assert!(store.selection().is_none());
    assert_eq!(form.mode(&store), FormMode::Create);
}

#[test]
fn test_missing_field_rejected() {
    let mut form = PatientForm::new();
    let mut store = PatientStore::try_with_records(vec![make_record("abc")]).unwrap();
    let notifier = CollectingNotifier::new();
    fill(&mut form, ["", "Ana", "a@x.com", "2024-01-01", "cough"]);
    let draft_before = form.draft().clone();
    let snapshot_before = store.snapshot();

    let err = form.submit(&mut store, &notifier).unwrap_err();

    assert_eq!(err.missing, vec![Field::PetName]);
    assert!(form.has_error());
    assert_eq!(form.draft(), &draft_before);
    assert_eq!(store.records(), snapshot_before.as_slice());
    assert_eq!(store.revision(), 0);
    assert!(notifier.drain().is_empty());
}

#[test]
fn test_missing_field_rejected_while_editing() {
    let mut form = PatientForm::new();
    let mut store = PatientStore::try_with_records(vec![make_record("abc")]).unwrap();
    let notifier = CollectingNotifier::new();

    assert!(form.select_by_id(&mut store, "abc"));
    let revision_before = store.revision();
    form.set_field(Field::PetName, "");

    let err = form.submit(&mut store, &notifier).unwrap_err();

    assert_eq!(err.missing, vec![Field::PetName]);
    assert!(form.has_error());
    assert_eq!(form.mode(&store), FormMode::Edit { id: "abc".into() });
    assert_eq!(form.submit_label(&store), "Save Changes");
    assert_eq!(store.get("abc"), Some(&make_record("abc")));
    assert_eq!(store.revision(), revision_before);
    assert_eq!(form.draft().pet_name, "");
    assert_eq!(form.draft().symptoms, "cough");
    assert!(notifier.drain().is_empty());
}

#[test]
fn test_select_then_submit_reproduces_record() {
    let mut form = PatientForm::new();
    let original = make_record("abc");
    let mut store = PatientStore::try_with_records(vec![original.clone()]).unwrap();

    form.select_by_id(&mut store, "abc");
    assert_eq!(form.draft(), &PatientDraft::from_record(&original));

    form.submit(&mut store, &NoopNotifier).unwrap();
    assert_eq!(store.records(), &[original]);
}

#[test]
fn test_create_edit_cycle() {
    let mut form = PatientForm::new();
    let mut store = PatientStore::new();
    let notifier = CollectingNotifier::new();

    fill(&mut form, ["Rex", "Ana", "ana@x.com", "2024-01-01", "cough"]);
    form.submit(&mut store, &notifier).unwrap();
    fill(&mut form, ["Luna", "Ben", "ben@x.com", "2024-02-02", "limping"]);
    form.submit(&mut store, &notifier).unwrap();

    let luna_id = store.records()[1].id.clone();
    assert_ne!(store.records()[0].id, luna_id);

    form.select_by_id(&mut store, &luna_id);
    form.set_field(Field::OwnerName, "Bea");
    form.submit(&mut store, &notifier).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[1].owner_name, "Bea");
    assert_eq!(store.records()[1].id, luna_id);

    let titles: Vec<_> = notifier.drain().into_iter().map(|t| t.title).collect();
    assert_eq!(
        titles,
        vec![
            "Client registered successfully",
            "Client registered successfully",
            "Data updated successfully",
        ]
    );
}
