use error_stack::{Context, Report};

// We need to dissect the error of figment so that
// we can get more info on why the configuration
// fails to parse (from a file or environment vars)
pub trait FigmentErrorAttachable<T: Context> {
    fn attach_figment_error(self, err: figment::Error) -> Report<T>;
}

impl<T: Context> FigmentErrorAttachable<T> for Report<T> {
    fn attach_figment_error(mut self, err: figment::Error) -> Report<T> {
        for e in err {
            let mut parts = vec![e.kind.to_string()];
            if let (Some(profile), Some(md)) = (&e.profile, &e.metadata) {
                if !e.path.is_empty() {
                    let key = md.interpolate(profile, &e.path);
                    parts.push(format!("for key {key:?}"));
                }
            }

            if let Some(md) = &e.metadata {
                parts.push(match &md.source {
                    Some(source) => format!("in {source} {}", md.name),
                    None => format!("in {}", md.name),
                });
            }

            self = self.attach_printable(parts.join(" "));
        }
        self
    }
}
