// exFAT allocation bitmap
// Unlike FAT12/16/32 which mark clusters in the FAT, exFAT tracks allocation
// in a bitmap stored in the cluster heap. Bit 0 of byte 0 is cluster 2.

use super::FIRST_CLUSTER;

/// exFAT allocation bitmap
#[derive(Debug, Clone)]
pub struct ExFatBitmap {
    data: Vec<u8>,
    cluster_count: u32,
}

impl ExFatBitmap {
    /// Create an empty bitmap for the given number of heap clusters
    pub fn new(cluster_count: u32) -> Self {
        Self {
            data: vec![0u8; cluster_count.div_ceil(8) as usize],
            cluster_count,
        }
    }

    fn bit(&self, cluster: u32) -> Option<(usize, u8)> {
        let index = cluster.checked_sub(FIRST_CLUSTER)?;
        if index >= self.cluster_count {
            return None;
        }
        Some(((index / 8) as usize, 1 << (index % 8)))
    }

    /// Check if a cluster is allocated
    pub fn is_allocated(&self, cluster: u32) -> bool {
        self.bit(cluster)
            .map(|(byte, mask)| self.data[byte] & mask != 0)
            .unwrap_or(false)
    }

    /// Mark a cluster as allocated. Out-of-range clusters are ignored.
    pub fn set_allocated(&mut self, cluster: u32) {
        if let Some((byte, mask)) = self.bit(cluster) {
            self.data[byte] |= mask;
        }
    }

    /// Mark `count` clusters starting at `first` as allocated
    pub fn allocate_range(&mut self, first: u32, count: u32) {
        for cluster in first..first.saturating_add(count) {
            self.set_allocated(cluster);
        }
    }

    /// Count the number of free clusters
    pub fn count_free(&self) -> u32 {
        let used: u32 = self.data.iter().map(|b| b.count_ones()).sum();
        self.cluster_count - used
    }

    /// Size of the on-disk bitmap in bytes
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_operations() {
        let mut bitmap = ExFatBitmap::new(100);
        assert_eq!(bitmap.len(), 13);
        assert!(!bitmap.is_allocated(5));

        bitmap.set_allocated(5);
        assert!(bitmap.is_allocated(5));
        assert_eq!(bitmap.count_free(), 99);
    }

    #[test]
    fn test_lsb_first_from_cluster_two() {
        let mut bitmap = ExFatBitmap::new(20);
        bitmap.allocate_range(2, 3);
        assert_eq!(bitmap.as_bytes(), &[0b0000_0111, 0, 0]);

        bitmap.set_allocated(10);
        assert_eq!(bitmap.as_bytes()[1], 0b0000_0001);
    }

    #[test]
    fn test_out_of_range_clusters_ignored() {
        let mut bitmap = ExFatBitmap::new(8);
        bitmap.set_allocated(0);
        bitmap.set_allocated(1);
        bitmap.set_allocated(10);
        assert_eq!(bitmap.count_free(), 8);
        assert!(!bitmap.is_allocated(10));

        bitmap.set_allocated(9);
        assert_eq!(bitmap.as_bytes(), &[0x80]);
    }
}
