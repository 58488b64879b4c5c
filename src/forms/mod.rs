pub mod customer_form;
pub mod view;

pub use customer_form::{CustomerForm, SubmitOutcome};
pub use view::FormView;
