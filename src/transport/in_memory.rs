use tokio::io::{duplex, DuplexStream};

/// Buffer size per direction. Every message fits several times over.
const PIPE_CAPACITY: usize = 1024;

/// Two connected in-process stream ends. Dropping one makes the other see EOF.
pub fn pair() -> (DuplexStream, DuplexStream) {
    duplex(PIPE_CAPACITY)
}
