use error_stack::Report;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Error)]
#[error("Invalid given data occurred")]
pub struct Wrapper;

pub trait IntoValidatorReport<T> {
    fn into_validator_report(self) -> error_stack::Result<T, Wrapper>;
}

impl<T> IntoValidatorReport<T> for Result<T, ValidationErrors> {
    fn into_validator_report(self) -> error_stack::Result<T, Wrapper> {
        self.map_err(|errors| {
            fn read_errors(
                errors: &ValidationErrors,
                path: &mut Vec<String>,
                mut report: Report<Wrapper>,
            ) -> Report<Wrapper> {
                for (field, kind) in errors.errors() {
                    path.push((*field).to_string());
                    report = match kind {
                        ValidationErrorsKind::Field(list) => {
                            let key = path.join(".");
                            for error in list {
                                let message = error.message.as_ref().unwrap_or(&error.code);
                                report = report.attach_printable(format!("{key}: {message}"));
                            }
                            report
                        }
                        ValidationErrorsKind::Struct(inner) => read_errors(inner, path, report),
                        ValidationErrorsKind::List(items) => {
                            for (index, inner) in items {
                                path.push(index.to_string());
                                report = read_errors(inner, path, report);
                                path.pop();
                            }
                            report
                        }
                    };
                    path.pop();
                }
                report
            }

            let mut path = Vec::new();
            read_errors(&errors, &mut path, Report::new(Wrapper))
        })
    }
}
