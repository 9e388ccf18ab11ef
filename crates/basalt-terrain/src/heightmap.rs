//! Height-map storage, sampling, and the raw on-disk codec

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use basalt_core::{BasaltError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// A square grid of elevation samples
///
/// Samples are stored row-major and addressed by integer `(x, z)` grid
/// coordinates. The grid dimension is fixed at construction.
pub struct HeightMap {
    /// Row-major elevation values, `size * size` entries
    samples: Vec<f32>,
    /// Grid dimension in samples along each axis
    size: usize,
    min_height: f32,
    max_height: f32,
}

impl HeightMap {
    /// Create a heightmap from raw row-major samples.
    ///
    /// The sample count must be `size * size`; anything else is a
    /// [`BasaltError::LoadFailure`].
    pub fn from_samples(samples: Vec<f32>, size: usize) -> Result<Self> {
        if size == 0 || samples.len() != size * size {
            return Err(BasaltError::LoadFailure(format!(
                "expected {} samples for a {size}x{size} grid, got {}",
                size * size,
                samples.len()
            )));
        }

        let (min_height, max_height) = min_max(&samples);

        Ok(Self {
            samples,
            size,
            min_height,
            max_height,
        })
    }

    /// Load a heightmap from a raw little-endian `f32` grid file.
    ///
    /// The format is headerless; the square dimension is implicit in the
    /// file length. A file that is not a whole number of `f32`s, or whose
    /// sample count is not a perfect square, is a `LoadFailure`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            BasaltError::LoadFailure(format!("failed to open heightmap '{}': {}", path.display(), e))
        })?;

        let byte_len = file.metadata()?.len();
        if byte_len % 4 != 0 {
            return Err(BasaltError::LoadFailure(format!(
                "heightmap '{}' is {} bytes, not a whole number of f32 samples",
                path.display(),
                byte_len
            )));
        }

        let count = (byte_len / 4) as usize;
        let size = (count as f64).sqrt().round() as usize;
        if size == 0 || size * size != count {
            return Err(BasaltError::LoadFailure(format!(
                "heightmap '{}' holds {} samples, which is not a square grid",
                path.display(),
                count
            )));
        }

        let mut reader = BufReader::new(file);
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            // Bit-pattern preserving: NaN payloads survive a round-trip.
            samples.push(f32::from_bits(reader.read_u32::<LittleEndian>()?));
        }

        tracing::info!(size, path = %path.display(), "loaded heightmap");

        Self::from_samples(samples, size)
    }

    /// Write the raw little-endian `f32` grid. Inverse of [`HeightMap::load`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        for &sample in &self.samples {
            writer.write_u32::<LittleEndian>(sample.to_bits())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Load a heightmap from a square grayscale image.
    /// Values are normalized to [0..1] regardless of bit depth.
    pub fn from_image<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| {
            BasaltError::LoadFailure(format!("failed to load heightmap '{}': {}", path.display(), e))
        })?;

        let gray = img.into_luma16();
        if gray.width() != gray.height() {
            return Err(BasaltError::LoadFailure(format!(
                "heightmap image '{}' is {}x{}, terrain grids must be square",
                path.display(),
                gray.width(),
                gray.height()
            )));
        }

        let size = gray.width() as usize;
        let samples: Vec<f32> = gray.pixels().map(|p| p.0[0] as f32 / 65535.0).collect();

        tracing::info!(size, path = %path.display(), "loaded heightmap image");

        Self::from_samples(samples, size)
    }

    /// Grid dimension in samples along each axis
    pub fn size(&self) -> usize {
        self.size
    }

    /// Lowest sample in the grid
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Highest sample in the grid
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// The elevation at grid coordinates `(x, z)`.
    ///
    /// Coordinates outside the grid are a [`BasaltError::OutOfBounds`].
    pub fn get(&self, x: usize, z: usize) -> Result<f32> {
        if x >= self.size || z >= self.size {
            return Err(BasaltError::OutOfBounds {
                x: x as i64,
                z: z as i64,
                size: self.size,
            });
        }

        Ok(self.samples[z * self.size + x])
    }

    /// The elevation at `(x, z)`, clamping out-of-range coordinates to the
    /// nearest edge sample.
    pub fn get_clamped(&self, x: i64, z: i64) -> f32 {
        let x = x.clamp(0, self.size as i64 - 1) as usize;
        let z = z.clamp(0, self.size as i64 - 1) as usize;

        self.samples[z * self.size + x]
    }

    /// Bilinear sample at fractional grid coordinates.
    ///
    /// Interpolates between the four surrounding integer samples, so at
    /// integer-aligned coordinates this degenerates exactly to [`HeightMap::get`].
    /// Coordinates outside the grid clamp to the edge rather than extrapolate.
    pub fn sample(&self, fx: f32, fz: f32) -> f32 {
        if self.size == 1 {
            return self.samples[0];
        }

        let max = (self.size - 1) as f32;
        let fx = fx.clamp(0.0, max);
        let fz = fz.clamp(0.0, max);

        let x0 = (fx as usize).min(self.size - 2);
        let z0 = (fz as usize).min(self.size - 2);

        let tx = fx - x0 as f32;
        let tz = fz - z0 as f32;

        let h00 = self.samples[z0 * self.size + x0];
        let h10 = self.samples[z0 * self.size + x0 + 1];
        let h01 = self.samples[(z0 + 1) * self.size + x0];
        let h11 = self.samples[(z0 + 1) * self.size + x0 + 1];

        // Endpoint-exact blend: degenerates to the raw sample at tx/tz of 0
        // or 1, so grid-aligned queries match `get` bit for bit.
        let bottom = h00 * (1.0 - tx) + h10 * tx;
        let top = h01 * (1.0 - tx) + h11 * tx;

        bottom * (1.0 - tz) + top * tz
    }

    /// The raw row-major samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

fn min_max(samples: &[f32]) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &s in samples {
        if s < min {
            min = s;
        }
        if s > max {
            max = s;
        }
    }
    (min, max)
}
