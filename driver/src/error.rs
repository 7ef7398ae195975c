use kernel::KernelError;

/// Maps a driver-specific failure onto the kernel error taxonomy.
pub trait ConvertError: 'static + Sized {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
