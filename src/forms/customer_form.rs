//! Customer form controller
//!
//! Holds the edited record, the per-field validation messages and the
//! submission-failure flag, and drives them from change, blur and submit
//! events. The controller is meant for a single-threaded event loop: every
//! handler takes `&self`, and `submit` releases all borrows before awaiting
//! the save call so the form stays editable while a request is in flight.

use std::cell::{Cell, RefCell};

use log::{debug, error, info, warn};

use crate::{
    error::SaveError,
    forms::view::{FieldView, FormView, SubmitView},
    functional::validation_engine::{any_errors, has_error, validate_many, ValidationResult, ValidatorSet},
    models::customer::{validators::customer_validators, Customer, CustomerField, SavedCustomer},
    services::customer_service::CustomerGateway,
};

type OnSave = Box<dyn Fn(&SavedCustomer)>;

/// Result of a single submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was made.
    Invalid(ValidationResult),
    /// The endpoint stored the customer and `on_save` was called.
    Saved(SavedCustomer),
    /// The request was made but did not succeed; the error banner is shown.
    Failed(SaveError),
    /// Another submission was still awaiting its response; nothing was done.
    InFlight,
}

/// Marks a submission as in flight until dropped, including when the submit
/// future itself is dropped before the save completes.
struct SubmittingGuard<'a>(&'a Cell<bool>);

impl<'a> SubmittingGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct CustomerForm<G> {
    gateway: G,
    validators: &'static ValidatorSet,
    customer: RefCell<Customer>,
    validation_errors: RefCell<ValidationResult>,
    submission_failed: Cell<bool>,
    submitting: Cell<bool>,
    on_save: OnSave,
}

impl<G: CustomerGateway> CustomerForm<G> {
    /// Creates a form seeded with `initial` values.
    ///
    /// The initial values are copied once; later changes to the caller's
    /// copy never re-seed the form.
    pub fn new(initial: Customer, gateway: G) -> Self {
        Self {
            gateway,
            validators: customer_validators(),
            customer: RefCell::new(initial),
            validation_errors: RefCell::new(ValidationResult::new()),
            submission_failed: Cell::new(false),
            submitting: Cell::new(false),
            on_save: Box::new(|_| {}),
        }
    }

    /// Registers the callback invoked once per successful submission.
    pub fn on_save<F>(mut self, on_save: F) -> Self
    where
        F: Fn(&SavedCustomer) + 'static,
    {
        self.on_save = Box::new(on_save);
        self
    }

    /// Accepts a new value for `field` without validating it.
    pub fn change(&self, field: CustomerField, value: impl Into<String>) {
        self.customer.borrow_mut().set(field, value);
    }

    /// Validates the current value of `field` and updates only its message.
    pub fn blur(&self, field: CustomerField) {
        let result = {
            let customer = self.customer.borrow();
            validate_many(self.validators, [(field.name(), customer.get(field))])
        };
        let message = result.get(field.name()).map(str::to_string);
        debug!("Blur on {}: {:?}", field, message);

        self.validation_errors
            .borrow_mut()
            .merge_field(field.name(), message);
    }

    /// Validates the whole record and, when it is valid, saves it.
    ///
    /// Invalid records replace the stored validation messages and make no
    /// request. A failed request (non-ok status, transport failure or an
    /// undecodable body) sets the failure flag and leaves the record and the
    /// validation messages untouched. Only one submission runs at a time.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.submitting.get() {
            debug!("Submit ignored: a save is already in flight");
            return SubmitOutcome::InFlight;
        }

        let customer = self.customer.borrow().clone();
        let result = validate_many(self.validators, customer.fields());
        if any_errors(&result) {
            debug!("Submit blocked by validation errors: {:?}", result);
            *self.validation_errors.borrow_mut() = result.clone();
            return SubmitOutcome::Invalid(result);
        }

        let saved = {
            let _submitting = SubmittingGuard::engage(&self.submitting);
            self.gateway.save(&customer).await
        };

        match saved {
            Ok(saved) => {
                info!("Saved customer {}", saved.id);
                self.submission_failed.set(false);
                (self.on_save)(&saved);
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                match &e {
                    SaveError::Status(_) => warn!("Customer save rejected: {}", e),
                    SaveError::Transport(_) | SaveError::Decode(_) => {
                        error!("Customer save failed: {}", e)
                    }
                }
                self.submission_failed.set(true);
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub fn customer(&self) -> Customer {
        self.customer.borrow().clone()
    }

    pub fn validation_errors(&self) -> ValidationResult {
        self.validation_errors.borrow().clone()
    }

    pub fn has_error(&self, field: CustomerField) -> bool {
        has_error(&self.validation_errors.borrow(), field.name())
    }

    pub fn submission_failed(&self) -> bool {
        self.submission_failed.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Derives the rendered surface from the current state.
    pub fn view(&self) -> FormView {
        let customer = self.customer.borrow();
        let errors = self.validation_errors.borrow();

        let fields = CustomerField::ALL
            .into_iter()
            .map(|field| {
                let error = has_error(&errors, field.name())
                    .then(|| errors.get(field.name()).map(str::to_string))
                    .flatten();
                FieldView::new(field, customer.get(field), error)
            })
            .collect();

        FormView::new(
            self.submission_failed.get(),
            fields,
            SubmitView::new(self.submitting.get()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::FutureExt;
    use std::rc::Rc;

    const FORMAT_MESSAGE: &str = "Only numbers, spaces and these symbols are allowed: ( ) + -";

    /// Gateway replaying a fixed response and counting calls.
    struct StubGateway {
        response: Result<SavedCustomer, SaveError>,
        saved: RefCell<Vec<Customer>>,
    }

    impl StubGateway {
        fn ok(saved: SavedCustomer) -> Self {
            Self {
                response: Ok(saved),
                saved: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: SaveError) -> Self {
            Self {
                response: Err(error),
                saved: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.saved.borrow().len()
        }
    }

    #[async_trait::async_trait(?Send)]
    impl CustomerGateway for StubGateway {
        async fn save(&self, customer: &Customer) -> Result<SavedCustomer, SaveError> {
            self.saved.borrow_mut().push(customer.clone());
            self.response.clone()
        }
    }

    /// Gateway whose first save waits until the test releases it.
    struct PendingGateway {
        release: RefCell<Option<oneshot::Receiver<()>>>,
        calls: Cell<usize>,
    }

    #[async_trait::async_trait(?Send)]
    impl CustomerGateway for PendingGateway {
        async fn save(&self, customer: &Customer) -> Result<SavedCustomer, SaveError> {
            self.calls.set(self.calls.get() + 1);
            let release = self.release.borrow_mut().take();
            if let Some(release) = release {
                release
                    .await
                    .map_err(|e| SaveError::Transport(e.to_string()))?;
            }
            Ok(SavedCustomer::new(1, customer.clone()))
        }
    }

    /// Gateway whose first save never completes.
    struct StalledGateway {
        calls: Cell<usize>,
    }

    #[async_trait::async_trait(?Send)]
    impl CustomerGateway for StalledGateway {
        async fn save(&self, customer: &Customer) -> Result<SavedCustomer, SaveError> {
            self.calls.set(self.calls.get() + 1);
            if self.calls.get() == 1 {
                futures::future::pending::<()>().await;
            }
            Ok(SavedCustomer::new(7, customer.clone()))
        }
    }

    fn ann() -> Customer {
        Customer::new("Ann", "B", "555")
    }

    fn saved_ann() -> SavedCustomer {
        SavedCustomer::new(123, ann())
    }

    fn recorder() -> (Rc<RefCell<Vec<SavedCustomer>>>, impl Fn(&SavedCustomer) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |saved: &SavedCustomer| sink.borrow_mut().push(saved.clone()))
    }

    #[test]
    fn change_accepts_value_without_validating() {
        let form = CustomerForm::new(ann(), StubGateway::ok(saved_ann()));
        form.change(CustomerField::FirstName, "");

        assert_eq!(form.customer().first_name, "");
        assert!(form.validation_errors().is_empty());
    }

    #[test]
    fn blur_reports_format_error_until_next_blur() {
        let form = CustomerForm::new(ann(), StubGateway::ok(saved_ann()));

        form.change(CustomerField::PhoneNumber, "abc");
        form.blur(CustomerField::PhoneNumber);
        assert_eq!(
            form.validation_errors().get("phoneNumber"),
            Some(FORMAT_MESSAGE)
        );

        form.change(CustomerField::PhoneNumber, "555");
        assert!(form.has_error(CustomerField::PhoneNumber));

        form.blur(CustomerField::PhoneNumber);
        assert!(!form.has_error(CustomerField::PhoneNumber));
    }

    #[test]
    fn blur_preserves_other_fields_errors() {
        let form = CustomerForm::new(Customer::default(), StubGateway::ok(saved_ann()));

        form.blur(CustomerField::FirstName);
        form.blur(CustomerField::LastName);
        assert_eq!(form.validation_errors().len(), 2);

        form.change(CustomerField::LastName, "B");
        form.blur(CustomerField::LastName);

        let errors = form.validation_errors();
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("lastName"), None);
    }

    #[actix_rt::test]
    async fn submit_with_invalid_record_makes_no_request() {
        let gateway = StubGateway::ok(saved_ann());
        let form = CustomerForm::new(Customer::new("", "B", "555"), gateway);

        let outcome = form.submit().await;

        let mut expected = ValidationResult::new();
        expected.insert("firstName", "First name is required");
        assert_eq!(outcome, SubmitOutcome::Invalid(expected.clone()));
        assert_eq!(form.validation_errors(), expected);
        assert_eq!(form.gateway.calls(), 0);
        assert!(!form.submission_failed());
    }

    #[actix_rt::test]
    async fn submit_validation_replaces_stale_errors() {
        let form = CustomerForm::new(Customer::new("Ann", "", "abc"), StubGateway::ok(saved_ann()));
        form.blur(CustomerField::PhoneNumber);
        form.change(CustomerField::PhoneNumber, "555");

        form.submit().await;

        let errors = form.validation_errors();
        assert_eq!(errors.get("lastName"), Some("Last name is required"));
        assert_eq!(errors.get("phoneNumber"), None);
        assert_eq!(errors.len(), 1);
    }

    #[actix_rt::test]
    async fn successful_submit_calls_on_save_once() {
        let (calls, on_save) = recorder();
        let form = CustomerForm::new(ann(), StubGateway::ok(saved_ann())).on_save(on_save);

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Saved(saved_ann()));
        assert_eq!(*calls.borrow(), vec![saved_ann()]);
        assert_eq!(*form.gateway.saved.borrow(), vec![ann()]);
        assert!(!form.submission_failed());
        assert_eq!(form.view().banner, None);
    }

    #[actix_rt::test]
    async fn rejected_submit_shows_banner_without_on_save() {
        let (calls, on_save) = recorder();
        let form = CustomerForm::new(ann(), StubGateway::failing(SaveError::Status(500)))
            .on_save(on_save);

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed(SaveError::Status(500)));
        assert!(calls.borrow().is_empty());
        assert!(form.submission_failed());
        assert!(form.validation_errors().is_empty());
        assert_eq!(form.view().banner, Some("An error occurred during save."));
        assert_eq!(form.customer(), ann());
    }

    #[actix_rt::test]
    async fn transport_failure_is_treated_like_rejection() {
        let (calls, on_save) = recorder();
        let form = CustomerForm::new(
            ann(),
            StubGateway::failing(SaveError::Transport("connection refused".to_string())),
        )
        .on_save(on_save);

        let outcome = form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(SaveError::Transport(_))));
        assert!(calls.borrow().is_empty());
        assert!(form.submission_failed());
    }

    #[actix_rt::test]
    async fn failure_flag_survives_edits_and_clears_on_success() {
        let form = CustomerForm::new(ann(), StubGateway::failing(SaveError::Status(500)));
        form.submit().await;
        assert!(form.submission_failed());

        form.change(CustomerField::FirstName, "Bob");
        form.blur(CustomerField::FirstName);
        assert!(form.submission_failed());

        let form = CustomerForm {
            gateway: StubGateway::ok(saved_ann()),
            ..form
        };
        form.submit().await;
        assert!(!form.submission_failed());
    }

    #[actix_rt::test]
    async fn invalid_submit_keeps_failure_flag() {
        let form = CustomerForm::new(ann(), StubGateway::failing(SaveError::Status(500)));
        form.submit().await;

        form.change(CustomerField::LastName, "");
        let outcome = form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(form.submission_failed());
    }

    #[actix_rt::test]
    async fn concurrent_submit_is_rejected_while_in_flight() {
        let (release, receiver) = oneshot::channel();
        let gateway = PendingGateway {
            release: RefCell::new(Some(receiver)),
            calls: Cell::new(0),
        };
        let form = CustomerForm::new(ann(), gateway);

        let first = form.submit();
        let second = async {
            assert!(form.is_submitting());
            assert!(form.view().submit.disabled);
            form.change(CustomerField::FirstName, "Bob");
            let outcome = form.submit().await;
            release.send(()).unwrap();
            outcome
        };

        let (first, second) = futures::join!(first, second);

        assert_eq!(second, SubmitOutcome::InFlight);
        match first {
            SubmitOutcome::Saved(saved) => assert_eq!(saved.customer, ann()),
            other => panic!("expected saved outcome, got {other:?}"),
        }
        assert_eq!(form.gateway.calls.get(), 1);
        assert!(!form.is_submitting());
        assert_eq!(form.customer().first_name, "Bob");
    }

    #[actix_rt::test]
    async fn dropped_submit_releases_the_form() {
        let form = CustomerForm::new(ann(), StalledGateway { calls: Cell::new(0) });

        assert!(form.submit().now_or_never().is_none());

        assert!(!form.is_submitting());
        assert!(!form.view().submit.disabled);
        match form.submit().await {
            SubmitOutcome::Saved(saved) => assert_eq!(saved.id, serde_json::json!(7)),
            other => panic!("expected saved outcome, got {other:?}"),
        }
        assert_eq!(form.gateway.calls.get(), 2);
    }

    #[test]
    fn view_shows_inline_errors_only_for_failing_fields() {
        let form = CustomerForm::new(Customer::new("", "B", "555"), StubGateway::ok(saved_ann()));
        form.blur(CustomerField::FirstName);
        form.blur(CustomerField::LastName);

        let view = form.view();
        assert_eq!(view.fields[0].error.as_deref(), Some("First name is required"));
        assert_eq!(view.fields[1].error, None);
        assert_eq!(view.fields[2].value, "555");
        assert_eq!(view.banner, None);
        assert!(!view.submit.disabled);
    }
}
