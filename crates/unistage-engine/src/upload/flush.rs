use crate::error::UniformError;
use crate::uniforms::UniformBlock;

use super::{FlushOutcome, UploadTarget};

impl UniformBlock {
    /// Synchronizes `target` with the staging buffer.
    ///
    /// - clean: no-op, returns `Skipped`
    /// - dirty: copies the whole buffer, clears the flag, returns `Uploaded`
    ///
    /// If the target fails the block stays dirty, so calling `flush` again retries.
    /// The target gets a copy of the buffer and may write to the block while
    /// uploading; such a write keeps the block dirty for the next flush.
    pub fn flush<T: UploadTarget + ?Sized>(
        &self,
        target: &mut T,
    ) -> Result<FlushOutcome, UniformError> {
        if !self.staging.is_dirty() {
            log::trace!("uniform block {:?}: clean, nothing to upload", self.label());
            return Ok(FlushOutcome::Skipped);
        }

        let revision = self.staging.revision();
        let bytes = self.staging.snapshot();

        match target.update_data(&bytes) {
            Ok(()) => {
                if self.staging.mark_clean(revision) {
                    log::debug!("uniform block {:?}: uploaded {} bytes", self.label(), bytes.len());
                } else {
                    log::debug!(
                        "uniform block {:?}: written during upload, staying dirty",
                        self.label()
                    );
                }
                Ok(FlushOutcome::Uploaded)
            }
            Err(err) => {
                log::warn!("uniform block {:?}: upload failed, staying dirty: {err}", self.label());
                Err(UniformError::FlushFailed(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use crate::layout::{UniformDecl, UniformType};
    use crate::table::UniformHandle;

    #[derive(Default)]
    struct SpyTarget {
        calls: usize,
        last: Vec<u8>,
    }

    impl UploadTarget for SpyTarget {
        fn update_data(&mut self, bytes: &[u8]) -> Result<(), UploadError> {
            self.calls += 1;
            self.last = bytes.to_vec();
            Ok(())
        }
    }

    /// Fails the first `failures` calls, then behaves like a spy.
    struct FlakyTarget {
        failures: usize,
        inner: SpyTarget,
    }

    impl UploadTarget for FlakyTarget {
        fn update_data(&mut self, bytes: &[u8]) -> Result<(), UploadError> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(UploadError::Device("device lost".into()));
            }
            self.inner.update_data(bytes)
        }
    }

    fn block() -> UniformBlock {
        UniformBlock::new(&[
            UniformDecl::new("u_tint", UniformType::Float4),
            UniformDecl::array("u_steps", UniformType::Int, 2),
        ])
    }

    const TINT: UniformHandle = UniformHandle::from_index(0);
    const STEPS: UniformHandle = UniformHandle::from_index(1);

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn clean_flush_does_not_call_target() {
        let b = block();
        let mut spy = SpyTarget::default();

        assert_eq!(b.flush(&mut spy), Ok(FlushOutcome::Skipped));
        assert_eq!(spy.calls, 0);
    }

    #[test]
    fn dirty_flush_uploads_whole_buffer_and_cleans() {
        let b = block();
        let mut spy = SpyTarget::default();
        b.set(TINT, [0.1f32, 0.2, 0.3, 1.0]).unwrap();

        let outcome = b.flush(&mut spy).unwrap();

        assert!(outcome.was_updated());
        assert!(!b.is_dirty());
        assert_eq!(spy.calls, 1);
        assert_eq!(spy.last.len(), b.size());
        assert_eq!(spy.last, b.staging_bytes());
    }

    #[test]
    fn second_flush_without_writes_is_skipped() {
        let b = block();
        let mut spy = SpyTarget::default();
        b.set_array(STEPS, &[3i32, 4]).unwrap();

        b.flush(&mut spy).unwrap();
        assert_eq!(b.flush(&mut spy), Ok(FlushOutcome::Skipped));
        assert_eq!(spy.calls, 1);
    }

    #[test]
    fn write_after_flush_dirties_again() {
        let b = block();
        let mut spy = SpyTarget::default();
        b.set(STEPS, 1i32).unwrap();
        b.flush(&mut spy).unwrap();

        b.set(STEPS, 2i32).unwrap();
        assert!(b.is_dirty());
        assert_eq!(b.flush(&mut spy), Ok(FlushOutcome::Uploaded));
        assert_eq!(spy.calls, 2);
    }

    #[test]
    fn failed_write_does_not_trigger_upload() {
        let b = block();
        let mut spy = SpyTarget::default();
        assert!(b.set(TINT, 1.0f32).is_err());

        assert_eq!(b.flush(&mut spy), Ok(FlushOutcome::Skipped));
        assert_eq!(spy.calls, 0);
    }

    #[test]
    fn mark_dirty_forces_upload() {
        let b = block();
        let mut spy = SpyTarget::default();
        b.mark_dirty();

        assert_eq!(b.flush(&mut spy), Ok(FlushOutcome::Uploaded));
        assert_eq!(spy.last, vec![0u8; b.size()]);
    }

    // ── failures ──────────────────────────────────────────────────────────

    #[test]
    fn failed_upload_stays_dirty_and_retries() {
        let b = block();
        let mut flaky = FlakyTarget { failures: 1, inner: SpyTarget::default() };
        b.set(TINT, [1.0f32; 4]).unwrap();

        let err = b.flush(&mut flaky).unwrap_err();
        assert_eq!(err, UniformError::FlushFailed(UploadError::Device("device lost".into())));
        assert!(b.is_dirty());

        assert_eq!(b.flush(&mut flaky), Ok(FlushOutcome::Uploaded));
        assert!(!b.is_dirty());
        assert_eq!(flaky.inner.calls, 1);
    }

    /// Writes `value` into the block from inside `update_data`.
    struct WritingTarget<'a> {
        block: &'a UniformBlock,
        value: i32,
        inner: SpyTarget,
    }

    impl UploadTarget for WritingTarget<'_> {
        fn update_data(&mut self, bytes: &[u8]) -> Result<(), UploadError> {
            self.block
                .set(STEPS, self.value)
                .map_err(|err| UploadError::Device(err.to_string()))?;
            self.inner.update_data(bytes)
        }
    }

    #[test]
    fn write_during_upload_keeps_block_dirty() {
        let b = block();
        b.set(STEPS, 1i32).unwrap();
        let mut target = WritingTarget { block: &b, value: 5, inner: SpyTarget::default() };

        assert_eq!(b.flush(&mut target), Ok(FlushOutcome::Uploaded));
        assert_eq!(&target.inner.last[16..20], &1i32.to_ne_bytes());
        assert!(b.is_dirty());

        let mut spy = SpyTarget::default();
        assert_eq!(b.flush(&mut spy), Ok(FlushOutcome::Uploaded));
        assert_eq!(&spy.last[16..20], &5i32.to_ne_bytes());
        assert!(!b.is_dirty());
    }

    #[test]
    fn flush_through_trait_object() {
        let b = block();
        let mut spy = SpyTarget::default();
        b.set(TINT, [0.0f32; 4]).unwrap();

        let target: &mut dyn UploadTarget = &mut spy;
        assert_eq!(b.flush(target), Ok(FlushOutcome::Uploaded));
        assert_eq!(spy.calls, 1);
    }
}
