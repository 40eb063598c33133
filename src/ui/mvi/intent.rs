/// Something that happened: a key press or a finished background job.
pub trait Intent: Send + 'static {}
