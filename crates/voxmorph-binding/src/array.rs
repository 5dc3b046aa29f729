use voxmorph_volume::{Volume, VolumeSize};

/// Element types a host array can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostDtype {
    /// Boolean values.
    Logical,
    /// 64-bit floating point values.
    Double,
    /// 32-bit floating point values.
    Single,
    /// Unsigned 8-bit integers.
    UInt8,
    /// Signed 32-bit integers.
    Int32,
}

impl std::fmt::Display for HostDtype {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            HostDtype::Logical => "logical",
            HostDtype::Double => "double",
            HostDtype::Single => "single",
            HostDtype::UInt8 => "uint8",
            HostDtype::Int32 => "int32",
        };
        write!(f, "{name}")
    }
}

/// Flat element storage of a host array, first dimension fastest.
#[derive(Debug, Clone, PartialEq)]
pub enum HostData {
    /// Boolean storage.
    Logical(Vec<bool>),
    /// 64-bit floating point storage.
    Double(Vec<f64>),
    /// 32-bit floating point storage.
    Single(Vec<f32>),
    /// Unsigned 8-bit integer storage.
    UInt8(Vec<u8>),
    /// Signed 32-bit integer storage.
    Int32(Vec<i32>),
}

impl HostData {
    /// The element type of the storage.
    pub fn dtype(&self) -> HostDtype {
        match self {
            HostData::Logical(_) => HostDtype::Logical,
            HostData::Double(_) => HostDtype::Double,
            HostData::Single(_) => HostDtype::Single,
            HostData::UInt8(_) => HostDtype::UInt8,
            HostData::Int32(_) => HostDtype::Int32,
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        match self {
            HostData::Logical(v) => v.len(),
            HostData::Double(v) => v.len(),
            HostData::Single(v) => v.len(),
            HostData::UInt8(v) => v.len(),
            HostData::Int32(v) => v.len(),
        }
    }

    /// Whether the storage holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An n-dimensional array as exchanged with the host.
///
/// The array is not validated on construction: hosts may hand over anything,
/// and each operator checks what it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct HostArray {
    dims: Vec<usize>,
    data: HostData,
}

impl HostArray {
    /// Create a host array from its dimensions and storage.
    pub fn new(dims: Vec<usize>, data: HostData) -> Self {
        Self { dims, data }
    }

    /// Create a logical host array.
    pub fn logical(dims: Vec<usize>, data: Vec<bool>) -> Self {
        Self::new(dims, HostData::Logical(data))
    }

    /// The extents along each dimension.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The number of dimensions.
    pub fn ndims(&self) -> usize {
        self.dims.len()
    }

    /// The number of elements implied by the dimensions, or `None` if their
    /// product overflows `usize`.
    pub fn num_elements(&self) -> Option<usize> {
        self.dims.iter().try_fold(1usize, |n, &d| n.checked_mul(d))
    }

    /// The element type.
    pub fn dtype(&self) -> HostDtype {
        self.data.dtype()
    }

    /// The underlying storage.
    pub fn data(&self) -> &HostData {
        &self.data
    }

    /// The storage as booleans, if the array is logical.
    pub fn as_logical(&self) -> Option<&[bool]> {
        match &self.data {
            HostData::Logical(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Volume<bool>> for HostArray {
    fn from(volume: Volume<bool>) -> Self {
        let size = volume.size();
        HostArray::logical(vec![size.nx, size.ny, size.nz], volume.into_vec())
    }
}

/// The volume extents of a three dimensional host array.
pub(crate) fn volume_size(dims: &[usize]) -> Option<VolumeSize> {
    match dims {
        [nx, ny, nz] => Some(VolumeSize {
            nx: *nx,
            ny: *ny,
            nz: *nz,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_array_logical() {
        let array = HostArray::logical(vec![2, 3, 1], vec![true; 6]);
        assert_eq!(array.ndims(), 3);
        assert_eq!(array.num_elements(), Some(6));
        assert_eq!(array.dtype(), HostDtype::Logical);
        assert_eq!(array.as_logical().map(|v| v.len()), Some(6));
    }

    #[test]
    fn test_host_array_non_logical() {
        let array = HostArray::new(vec![4], HostData::Double(vec![0.0; 4]));
        assert_eq!(array.dtype(), HostDtype::Double);
        assert_eq!(array.dtype().to_string(), "double");
        assert!(array.as_logical().is_none());
        assert!(!array.data().is_empty());
    }

    #[test]
    fn test_host_array_num_elements_overflow() {
        let array = HostArray::logical(vec![usize::MAX / 3 + 1, 3, 3], vec![true; 6]);
        assert_eq!(array.num_elements(), None);

        let empty = HostArray::logical(vec![usize::MAX, 0, 3], vec![]);
        assert_eq!(empty.num_elements(), Some(0));
    }

    #[test]
    fn test_host_array_from_volume() {
        let size = VolumeSize { nx: 2, ny: 3, nz: 4 };
        let array = HostArray::from(Volume::from_size_val(size, true));
        assert_eq!(array.dims(), &[2, 3, 4]);
        assert_eq!(volume_size(array.dims()), Some(size));
        assert_eq!(volume_size(&[2, 3]), None);
    }
}
