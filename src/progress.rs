use std::sync::Arc;

/// Anything that accepts a fraction complete.
///
/// Implemented by [`crate::ProgressBar`], by [`std::sync::mpsc::Sender<f64>`]
/// so reports can cross to another thread, by references and `Arc`s of any
/// implementor, and by closures wrapped with [`from_fn`].
///
/// ```rust,ignore
/// fn copy_files(progress: &impl Progress) {
///     for (i, file) in files.iter().enumerate() {
///         copy(file);
///         progress.report((i + 1) as f64 / files.len() as f64);
///     }
/// }
/// ```
pub trait Progress {
    /// Reports a fraction complete. Implementations clamp or ignore
    /// out-of-range values; they never fail.
    fn report(&self, value: f64);
}

impl<P: Progress + ?Sized> Progress for &P {
    fn report(&self, value: f64) {
        (**self).report(value);
    }
}

impl<P: Progress + ?Sized> Progress for Arc<P> {
    fn report(&self, value: f64) {
        (**self).report(value);
    }
}

impl<P: Progress + ?Sized> Progress for Box<P> {
    fn report(&self, value: f64) {
        (**self).report(value);
    }
}

/// Sends are fire-and-forget: a closed receiver drops the value.
impl Progress for std::sync::mpsc::Sender<f64> {
    fn report(&self, value: f64) {
        let _ = self.send(value);
    }
}

/// A [`Progress`] backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FnProgress<F>(F);

impl<F: Fn(f64)> Progress for FnProgress<F> {
    fn report(&self, value: f64) {
        (self.0)(value);
    }
}

/// Wraps a closure as a [`Progress`].
///
/// ```rust,ignore
/// let progress = from_fn(|v| eprintln!("{:.0}%", v * 100.0));
/// progress.report(0.5);
/// ```
pub fn from_fn<F: Fn(f64)>(f: F) -> FnProgress<F> {
    FnProgress(f)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn drive(progress: &impl Progress) {
        for step in [0.0, 0.5, 1.0] {
            progress.report(step);
        }
    }

    #[test]
    fn closures_receive_reports() {
        let seen = Mutex::new(Vec::new());
        drive(&from_fn(|v| seen.lock().unwrap().push(v)));
        assert_eq!(*seen.lock().unwrap(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn sender_forwards_to_receiver() {
        let (tx, rx) = std::sync::mpsc::channel();
        drive(&tx);
        drop(tx);
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn sender_with_closed_receiver_is_silent() {
        let (tx, rx) = std::sync::mpsc::channel::<f64>();
        drop(rx);
        tx.report(0.3);
    }

    #[test]
    fn trait_objects_and_arcs() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let boxed: Box<dyn Progress> = Box::new(from_fn(move |v| sink.lock().unwrap().push(v)));
        let shared: Arc<dyn Progress> = Arc::from(boxed);
        drive(&shared);
        assert_eq!(seen.lock().unwrap().len(), 3);
    }
}
