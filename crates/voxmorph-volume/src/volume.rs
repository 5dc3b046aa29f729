use crate::error::VolumeError;

/// Volume size in voxels
///
/// The extents of a dense 3D volume along each axis. Voxels are stored with
/// `x` varying fastest, then `y`, then `z`.
///
/// # Examples
///
/// ```
/// use voxmorph_volume::VolumeSize;
///
/// let size = VolumeSize { nx: 4, ny: 3, nz: 2 };
///
/// assert_eq!(size.num_voxels(), 24);
/// assert_eq!(size.strides(), [1, 4, 12]);
/// assert_eq!(size.idx(1, 2, 1), 1 + 2 * 4 + 12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VolumeSize {
    /// Number of voxels along the x axis
    pub nx: usize,
    /// Number of voxels along the y axis
    pub ny: usize,
    /// Number of voxels along the z axis
    pub nz: usize,
}

impl VolumeSize {
    /// Total number of voxels in the volume.
    ///
    /// The product is not checked; use [`VolumeSize::checked_num_voxels`] for
    /// extents that come from outside the program.
    pub fn num_voxels(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Total number of voxels, or `None` if `nx * ny` or the full product
    /// overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxmorph_volume::VolumeSize;
    ///
    /// assert_eq!(VolumeSize { nx: 4, ny: 3, nz: 2 }.checked_num_voxels(), Some(24));
    /// assert_eq!(VolumeSize { nx: usize::MAX, ny: 2, nz: 1 }.checked_num_voxels(), None);
    /// ```
    pub fn checked_num_voxels(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(self.nz)
    }

    /// Linear distance between neighbouring voxels along each axis.
    pub fn strides(&self) -> [usize; 3] {
        [1, self.nx, self.nx * self.ny]
    }

    /// Linear index of the voxel at `(x, y, z)`.
    ///
    /// The coordinate is not checked against the extents.
    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.nx + z * self.nx * self.ny
    }

    /// Coordinates of the voxel stored at linear index `v`.
    ///
    /// Inverse of [`VolumeSize::idx`] for every `v < num_voxels()`.
    ///
    /// # Panics
    ///
    /// Panics if `nx` or `ny` is zero. Such a volume holds no voxels, so there is
    /// no valid `v` to convert.
    pub fn coords(&self, v: usize) -> [usize; 3] {
        let plane = self.nx * self.ny;
        let z = v / plane;
        let rem = v % plane;
        [rem % self.nx, rem / self.nx, z]
    }

    /// Whether `(x, y, z)` lies in the volume and touches any of its faces.
    pub fn is_border(&self, x: usize, y: usize, z: usize) -> bool {
        self.contains(x, y, z)
            && (x == 0
                || y == 0
                || z == 0
                || x == self.nx - 1
                || y == self.ny - 1
                || z == self.nz - 1)
    }

    /// Whether `(x, y, z)` lies inside the extents.
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.nx && y < self.ny && z < self.nz
    }

    /// Whether at least one voxel has a full face neighbourhood.
    pub fn has_interior(&self) -> bool {
        self.nx >= 3 && self.ny >= 3 && self.nz >= 3
    }

    /// Number of voxels that are not on the border.
    pub fn interior_len(&self) -> usize {
        self.nx.saturating_sub(2) * self.ny.saturating_sub(2) * self.nz.saturating_sub(2)
    }
}

impl std::fmt::Display for VolumeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "VolumeSize {{ nx: {}, ny: {}, nz: {} }}",
            self.nx, self.ny, self.nz
        )
    }
}

impl From<[usize; 3]> for VolumeSize {
    fn from(size: [usize; 3]) -> Self {
        VolumeSize {
            nx: size[0],
            ny: size[1],
            nz: size[2],
        }
    }
}

impl From<VolumeSize> for [usize; 3] {
    fn from(size: VolumeSize) -> Self {
        [size.nx, size.ny, size.nz]
    }
}

/// Represents a dense 3D volume of voxels.
///
/// The data is owned and laid out so that voxel `(x, y, z)` lives at
/// [`VolumeSize::idx`]`(x, y, z)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume<T> {
    size: VolumeSize,
    data: Vec<T>,
}

impl<T> Volume<T> {
    /// Create a new volume from voxel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The extents of the volume.
    /// * `data` - The voxel data in x-fastest order.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the volume size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxmorph_volume::{Volume, VolumeSize};
    ///
    /// let volume = Volume::new(VolumeSize { nx: 2, ny: 2, nz: 2 }, vec![true; 8]).unwrap();
    /// assert_eq!(volume.size().num_voxels(), 8);
    ///
    /// assert!(Volume::new(VolumeSize { nx: 2, ny: 2, nz: 2 }, vec![true; 7]).is_err());
    /// ```
    pub fn new(size: VolumeSize, data: Vec<T>) -> Result<Self, VolumeError> {
        let num_voxels = size
            .checked_num_voxels()
            .ok_or(VolumeError::ExtentsOverflow(size))?;
        if data.len() != num_voxels {
            return Err(VolumeError::InvalidDataLength(data.len(), num_voxels));
        }
        Ok(Self { size, data })
    }

    /// Create a new volume with every voxel set to `val`.
    ///
    /// # Panics
    ///
    /// Panics if the voxel count overflows `usize`; use [`Volume::new`] for
    /// untrusted extents.
    pub fn from_size_val(size: VolumeSize, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            data: vec![val; size.num_voxels()],
        }
    }

    /// The extents of the volume.
    pub fn size(&self) -> VolumeSize {
        self.size
    }

    /// The voxel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The voxel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the volume and return its voxel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the voxel at `(x, y, z)`, or `None` if it lies outside the volume.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        if !self.size.contains(x, y, z) {
            return None;
        }
        self.data.get(self.size.idx(x, y, z))
    }

    /// Set the voxel at `(x, y, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::OutOfBounds`] if the coordinate lies outside the volume.
    pub fn set(&mut self, x: usize, y: usize, z: usize, val: T) -> Result<(), VolumeError> {
        if !self.size.contains(x, y, z) {
            return Err(VolumeError::OutOfBounds {
                x,
                y,
                z,
                size: self.size,
            });
        }
        let v = self.size.idx(x, y, z);
        self.data[v] = val;
        Ok(())
    }
}

impl Volume<bool> {
    /// Number of voxels that are set.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_size_strides() {
        let size = VolumeSize::from([5, 4, 3]);
        assert_eq!(size.strides(), [1, 5, 20]);
        assert_eq!(size.num_voxels(), 60);
        assert_eq!(size.interior_len(), 3 * 2);
        assert_eq!(size.to_string(), "VolumeSize { nx: 5, ny: 4, nz: 3 }");
    }

    #[test]
    fn volume_size_idx_coords() {
        let size = VolumeSize { nx: 5, ny: 4, nz: 3 };
        let mut v = 0;
        for z in 0..size.nz {
            for y in 0..size.ny {
                for x in 0..size.nx {
                    assert_eq!(size.idx(x, y, z), v);
                    assert_eq!(size.coords(v), [x, y, z]);
                    v += 1;
                }
            }
        }
    }

    #[test]
    fn volume_size_border() {
        let size = VolumeSize { nx: 3, ny: 3, nz: 3 };
        assert!(size.has_interior());
        assert!(!size.is_border(1, 1, 1));
        assert!(size.is_border(0, 1, 1));
        assert!(size.is_border(1, 2, 1));
        assert!(size.is_border(1, 1, 2));
        assert!(!size.is_border(3, 1, 1));

        let flat = VolumeSize { nx: 8, ny: 8, nz: 2 };
        assert!(!flat.has_interior());
        assert_eq!(flat.interior_len(), 0);
    }

    #[test]
    fn volume_size_empty() {
        let size = VolumeSize::default();
        assert_eq!(size.num_voxels(), 0);
        assert_eq!(size.interior_len(), 0);
        assert!(!size.has_interior());
        assert!(!size.is_border(0, 0, 0));
    }

    #[test]
    fn volume_size_checked_num_voxels() {
        let size = VolumeSize { nx: 5, ny: 4, nz: 3 };
        assert_eq!(size.checked_num_voxels(), Some(60));

        // nx * ny alone overflows even though nz is zero
        let plane = VolumeSize {
            nx: usize::MAX / 2 + 1,
            ny: 2,
            nz: 0,
        };
        assert_eq!(plane.checked_num_voxels(), None);

        let total = VolumeSize {
            nx: usize::MAX / 3 + 1,
            ny: 3,
            nz: 1,
        };
        assert_eq!(total.checked_num_voxels(), None);
    }

    #[test]
    #[should_panic]
    fn volume_size_coords_zero_extent() {
        let size = VolumeSize { nx: 0, ny: 3, nz: 3 };
        let _ = size.coords(0);
    }

    #[test]
    fn volume_new() -> Result<(), VolumeError> {
        let size = VolumeSize { nx: 2, ny: 3, nz: 4 };
        let volume = Volume::new(size, (0..24).collect::<Vec<u32>>())?;
        assert_eq!(volume.get(1, 2, 3), Some(&23));
        assert_eq!(volume.get(1, 0, 1), Some(&7));
        assert_eq!(volume.get(2, 0, 0), None);
        Ok(())
    }

    #[test]
    fn volume_new_invalid_length() {
        let size = VolumeSize { nx: 2, ny: 3, nz: 4 };
        let res = Volume::new(size, vec![false; 23]);
        assert_eq!(res, Err(VolumeError::InvalidDataLength(23, 24)));
    }

    #[test]
    fn volume_new_extents_overflow() {
        let size = VolumeSize {
            nx: usize::MAX / 3 + 1,
            ny: 3,
            nz: 3,
        };
        let res = Volume::new(size, vec![true; 6]);
        assert_eq!(res, Err(VolumeError::ExtentsOverflow(size)));
    }

    #[test]
    fn volume_set() -> Result<(), VolumeError> {
        let size = VolumeSize { nx: 3, ny: 3, nz: 3 };
        let mut volume = Volume::from_size_val(size, false);
        volume.set(1, 1, 1, true)?;
        assert_eq!(volume.count_true(), 1);
        assert!(volume.as_slice()[13]);

        let res = volume.set(0, 3, 0, true);
        assert_eq!(
            res,
            Err(VolumeError::OutOfBounds {
                x: 0,
                y: 3,
                z: 0,
                size
            })
        );
        Ok(())
    }
}
