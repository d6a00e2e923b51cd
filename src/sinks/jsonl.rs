use crate::core::event::ListenEvent;
use crate::core::traits::{Ack, PublishError, PublishSink};
use std::collections::hash_map::DefaultHasher;
use std::fs::{self, File, OpenOptions};
use std::hash::{Hash, Hasher};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// JSONL sink that routes records to shard files by partition key.
///
/// Each record is appended as one JSON line to `shard-NNN.jsonl` under the
/// output directory; the shard label is returned as the acknowledgment.
pub struct JsonlSink {
    shards: Vec<BufWriter<File>>,
    labels: Vec<String>,
}

impl JsonlSink {
    /// Opens `shard_count` shard files under `dir`, creating the directory
    /// if needed. A shard count of zero is treated as one.
    pub fn new(dir: impl AsRef<Path>, shard_count: usize) -> io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let shard_count = shard_count.max(1);
        let mut shards = Vec::with_capacity(shard_count);
        let mut labels = Vec::with_capacity(shard_count);
        for index in 0..shard_count {
            let label = format!("shard-{index:03}");
            let path = dir.join(format!("{label}.jsonl"));
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            shards.push(BufWriter::new(file));
            labels.push(label);
        }
        Ok(Self { shards, labels })
    }

    /// Flushes all shard buffers.
    pub fn flush(&mut self) -> io::Result<()> {
        for shard in &mut self.shards {
            shard.flush()?;
        }
        Ok(())
    }

    fn route(&self, partition_key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        partition_key.hash(&mut hasher);
        (hasher.finish() % self.shards.len() as u64) as usize
    }
}

impl PublishSink for JsonlSink {
    fn publish(
        &mut self,
        event: &ListenEvent,
        partition_key: &str,
    ) -> Result<Ack, PublishError> {
        let index = self.route(partition_key);
        let mut line = serde_json::to_vec(event)
            .map_err(|err| PublishError::new(format!("encode failed: {err}")))?;
        line.push(b'\n');
        self.shards[index]
            .write_all(&line)
            .map_err(|err| PublishError::new(format!("{}: {err}", self.labels[index])))?;
        Ok(Ack::new(self.labels[index].clone()))
    }
}
