//! Result sink module
//!
//! Consumers for the post stream. `drain` pulls a stream to completion
//! and feeds each post to a `PostSink`.

mod writers;

pub use writers::{JsonLinesSink, TextSink};

use crate::error::Result;
use crate::types::Post;
use futures::{Stream, StreamExt};

/// Consumer of streamed posts
pub trait PostSink {
    /// Handle one post
    fn consume(&mut self, post: &Post) -> Result<()>;

    /// Called once after the last post
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Feed every post of `stream` to `sink`.
///
/// Stops at the first error, whether it came from the stream or the sink,
/// and returns the number of posts consumed otherwise.
pub async fn drain<S, K>(mut stream: S, sink: &mut K) -> Result<usize>
where
    S: Stream<Item = Result<Post>> + Unpin,
    K: PostSink + ?Sized,
{
    let mut count = 0;
    while let Some(item) = stream.next().await {
        sink.consume(&item?)?;
        count += 1;
    }
    sink.finish()?;
    Ok(count)
}
