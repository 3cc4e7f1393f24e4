/// Progress of a multi-point flash calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashProgress {
    pub done: usize,
    pub total: usize,
}

impl FlashProgress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.done as f64 / self.total as f64
        }
    }
}

pub(crate) fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(FlashProgress)>,
    done: usize,
    total: usize,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(FlashProgress { done, total });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_handles_empty_runs() {
        assert_eq!(FlashProgress { done: 0, total: 0 }.fraction(), 1.0);
        assert_eq!(FlashProgress { done: 1, total: 4 }.fraction(), 0.25);
    }

    #[test]
    fn emit_without_callback_is_noop() {
        let mut none: Option<&mut dyn FnMut(FlashProgress)> = None;
        emit_progress(&mut none, 1, 2);

        let mut seen = Vec::new();
        let mut record = |p: FlashProgress| seen.push(p.done);
        let mut cb: Option<&mut dyn FnMut(FlashProgress)> = Some(&mut record);
        emit_progress(&mut cb, 1, 2);
        emit_progress(&mut cb, 2, 2);
        assert_eq!(seen, vec![1, 2]);
    }
}
