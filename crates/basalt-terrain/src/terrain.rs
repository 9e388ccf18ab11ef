//! Terrain configuration and the terrain façade

use std::path::Path;

use basalt_core::{BasaltError, Color, Result, TextureHandle, Vec3};
use serde::{Deserialize, Serialize};

use crate::heightmap::HeightMap;
use crate::lighting::{self, DirectionalLight, SlopeLightInfo};
use crate::triangle_list::TriangleList;

/// Most texture layers a terrain can blend between
pub const MAX_TEXTURE_LAYERS: usize = 4;

/// Configuration for terrain construction
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// World units per grid cell
    pub world_scale: f32,
    /// UV tiling factor across the whole grid
    pub texture_scale: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            world_scale: 1.0,
            texture_scale: 1.0,
        }
    }
}

impl TerrainConfig {
    /// Load a configuration from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Both scales must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.world_scale.is_finite() && self.world_scale > 0.0) {
            return Err(BasaltError::InvalidConfiguration(format!(
                "world_scale must be positive, got {}",
                self.world_scale
            )));
        }
        if !(self.texture_scale.is_finite() && self.texture_scale > 0.0) {
            return Err(BasaltError::InvalidConfiguration(format!(
                "texture_scale must be positive, got {}",
                self.texture_scale
            )));
        }
        Ok(())
    }
}

/// One texture band of the terrain
///
/// The handle indexes an external resource manager; `color` is a
/// representative color for CPU-side shading, since the core never samples
/// texel data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureLayer {
    pub texture: TextureHandle,
    /// Height at which this layer is fully dominant
    pub height: f32,
    pub color: Color,
}

/// The rendering collaborator
///
/// Terrain pushes its draw state through this seam; what happens on the
/// other side (GPU buffers, shaders, windowing) is out of scope.
pub trait TerrainRenderer {
    fn set_transform(&mut self, wvp: [[f32; 4]; 4]);
    fn set_light(&mut self, light: &DirectionalLight);
    fn bind_texture(&mut self, unit: u32, texture: TextureHandle);
    fn draw(&mut self, mesh: &TriangleList);
}

/// A heightmap terrain with static grid topology and slope-based lighting
///
/// Owns its heightmap, triangle list, and lighting precomputation. Any
/// `Terrain` value is fully initialized: construction validates the
/// configuration and generates the geometry, teardown is `Drop`.
pub struct Terrain {
    heightmap: HeightMap,
    triangle_list: TriangleList,
    config: TerrainConfig,
    layers: Vec<TextureLayer>,
    light: DirectionalLight,
    slope_info: SlopeLightInfo,
}

impl Terrain {
    /// Build a terrain over an existing heightmap.
    pub fn new(heightmap: HeightMap, config: TerrainConfig) -> Result<Self> {
        config.validate()?;
        let triangle_list = TriangleList::new(heightmap.size(), &config)?;
        let light = DirectionalLight::default();
        let slope_info = SlopeLightInfo::from_light_dir(&light.direction);

        tracing::debug!(
            size = heightmap.size(),
            min = heightmap.min_height(),
            max = heightmap.max_height(),
            "terrain initialized"
        );

        Ok(Self {
            heightmap,
            triangle_list,
            config,
            layers: Vec::new(),
            light,
            slope_info,
        })
    }

    /// Build a terrain from a raw heightmap file.
    pub fn load_from_file<P: AsRef<Path>>(path: P, config: TerrainConfig) -> Result<Self> {
        Self::new(HeightMap::load(path)?, config)
    }

    /// Write the height grid back out. Save-then-load round-trips losslessly.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.heightmap.save(path)
    }

    /// Grid dimension in vertices along each axis
    pub fn size(&self) -> usize {
        self.heightmap.size()
    }

    pub fn world_scale(&self) -> f32 {
        self.config.world_scale
    }

    pub fn texture_scale(&self) -> f32 {
        self.config.texture_scale
    }

    pub fn min_height(&self) -> f32 {
        self.heightmap.min_height()
    }

    pub fn max_height(&self) -> f32 {
        self.heightmap.max_height()
    }

    pub fn heightmap(&self) -> &HeightMap {
        &self.heightmap
    }

    pub fn triangle_list(&self) -> &TriangleList {
        &self.triangle_list
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn texture_layers(&self) -> &[TextureLayer] {
        &self.layers
    }

    /// The exact elevation at grid coordinates `(x, z)`.
    pub fn height_at(&self, x: usize, z: usize) -> Result<f32> {
        self.heightmap.get(x, z)
    }

    /// The interpolated elevation at world-space `(x, z)`.
    ///
    /// World coordinates map into grid space by `world_scale`, then the
    /// four surrounding samples blend bilinearly. Coordinates beyond the
    /// terrain clamp to the edge.
    pub fn height_interpolated(&self, world_x: f32, world_z: f32) -> f32 {
        self.heightmap.sample(
            world_x / self.config.world_scale,
            world_z / self.config.world_scale,
        )
    }

    /// Replace the light and refresh the slope sampling offsets.
    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
        self.slope_info = SlopeLightInfo::from_light_dir(&light.direction);
    }

    /// Point the existing light in a new direction.
    pub fn set_light_dir(&mut self, direction: Vec3) {
        self.light.direction = direction;
        self.slope_info = SlopeLightInfo::from_light_dir(&direction);
    }

    /// Configure the texture bands.
    ///
    /// At most [`MAX_TEXTURE_LAYERS`] layers, with strictly increasing
    /// height thresholds. A rejected configuration leaves the previous
    /// layers untouched.
    pub fn set_texture_layers(&mut self, layers: &[TextureLayer]) -> Result<()> {
        if layers.len() > MAX_TEXTURE_LAYERS {
            return Err(BasaltError::InvalidConfiguration(format!(
                "at most {MAX_TEXTURE_LAYERS} texture layers, got {}",
                layers.len()
            )));
        }
        for pair in layers.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(BasaltError::InvalidConfiguration(format!(
                    "texture layer heights must be strictly increasing, got {} then {}",
                    pair[0].height, pair[1].height
                )));
            }
        }

        self.layers = layers.to_vec();
        Ok(())
    }

    /// The slope-scale brightness at grid coordinates `(x, z)`.
    pub fn brightness_at(&self, x: usize, z: usize) -> Result<f32> {
        lighting::slope_scale_brightness(
            &self.heightmap,
            &self.slope_info,
            &self.light,
            self.config.world_scale,
            x,
            z,
        )
    }

    /// The shaded color at grid coordinates `(x, z)`: the height-blended
    /// layer color scaled by the slope-scale brightness.
    pub fn color_at(&self, x: usize, z: usize) -> Result<Color> {
        let height = self.heightmap.get(x, z)?;
        let brightness = self.brightness_at(x, z)?;

        Ok(self.layer_color(height) * brightness)
    }

    /// Blend the layer colors for a given height.
    ///
    /// Heights at or below the first threshold take the first layer;
    /// heights above the last take the last. In between, the band
    /// `(t_i, t_{i+1}]` blends layer `i` toward layer `i + 1`, so a height
    /// exactly on a threshold resolves to that layer's own color and the
    /// blend stays continuous across bands.
    fn layer_color(&self, height: f32) -> Color {
        let Some(first) = self.layers.first() else {
            return Color::WHITE;
        };
        if height <= first.height {
            return first.color;
        }

        for pair in self.layers.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if height <= upper.height {
                let t = (height - lower.height) / (upper.height - lower.height);
                return lower.color.lerp(&upper.color, t);
            }
        }

        self.layers[self.layers.len() - 1].color
    }

    /// Pass the terrain through the rendering collaborator: transform,
    /// light, one texture unit per configured layer, then the geometry.
    pub fn render<R: TerrainRenderer>(&self, renderer: &mut R, wvp: [[f32; 4]; 4]) {
        renderer.set_transform(wvp);
        renderer.set_light(&self.light);
        for (unit, layer) in self.layers.iter().enumerate() {
            renderer.bind_texture(unit as u32, layer.texture);
        }
        renderer.draw(&self.triangle_list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_terrain(size: usize) -> Terrain {
        let hm = HeightMap::from_samples(vec![0.0; size * size], size).unwrap();
        Terrain::new(hm, TerrainConfig::default()).unwrap()
    }

    fn layer(texture: u32, height: f32, color: Color) -> TextureLayer {
        TextureLayer {
            texture: TextureHandle(texture),
            height,
            color,
        }
    }

    #[test]
    fn config_validation() {
        assert!(TerrainConfig::default().validate().is_ok());

        let bad = TerrainConfig {
            world_scale: 0.0,
            texture_scale: 1.0,
        };
        assert!(matches!(
            bad.validate(),
            Err(BasaltError::InvalidConfiguration(_))
        ));

        let bad = TerrainConfig {
            world_scale: 1.0,
            texture_scale: -2.0,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn config_from_toml() {
        let dir = std::env::temp_dir().join("basalt_terrain_config");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("terrain.toml");

        std::fs::write(&path, "world_scale = 4.0\ntexture_scale = 16.0\n").unwrap();
        let config = TerrainConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.world_scale, 4.0);
        assert_eq!(config.texture_scale, 16.0);

        std::fs::write(&path, "world_scale = -1.0\ntexture_scale = 1.0\n").unwrap();
        assert!(TerrainConfig::from_toml_file(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn rejects_non_increasing_thresholds() {
        let mut terrain = flat_terrain(4);
        let layers = [
            layer(0, 0.0, Color::BLACK),
            layer(1, 10.0, Color::WHITE),
            layer(2, 10.0, Color::BLACK),
        ];
        assert!(matches!(
            terrain.set_texture_layers(&layers),
            Err(BasaltError::InvalidConfiguration(_))
        ));
        // The rejected update left the previous (empty) layers in place.
        assert!(terrain.texture_layers().is_empty());

        let too_many = [
            layer(0, 0.0, Color::BLACK),
            layer(1, 1.0, Color::BLACK),
            layer(2, 2.0, Color::BLACK),
            layer(3, 3.0, Color::BLACK),
            layer(4, 4.0, Color::BLACK),
        ];
        assert!(terrain.set_texture_layers(&too_many).is_err());
    }

    #[test]
    fn threshold_boundary_picks_the_layer_itself() {
        let samples = vec![
            0.0, 5.0, 10.0, 15.0, //
            20.0, 25.0, 30.0, 35.0, //
            2.5, 7.5, 12.5, 17.5, //
            22.5, 27.5, 32.5, 37.5,
        ];
        let hm = HeightMap::from_samples(samples, 4).unwrap();
        let mut terrain = Terrain::new(hm, TerrainConfig::default()).unwrap();

        let sand = Color::new(0.9, 0.8, 0.5);
        let grass = Color::new(0.2, 0.7, 0.2);
        let rock = Color::new(0.5, 0.5, 0.5);
        let snow = Color::WHITE;
        terrain
            .set_texture_layers(&[
                layer(0, 0.0, sand),
                layer(1, 10.0, grass),
                layer(2, 20.0, rock),
                layer(3, 30.0, snow),
            ])
            .unwrap();

        // Light straight down: brightness is exactly 1.0, so color_at
        // exposes the raw layer blend.
        assert_eq!(terrain.brightness_at(0, 0).unwrap(), 1.0);

        // Heights sitting exactly on a threshold take that layer's color.
        assert_eq!(terrain.color_at(0, 0).unwrap(), sand); // h = 0
        assert_eq!(terrain.color_at(2, 0).unwrap(), grass); // h = 10
        assert_eq!(terrain.color_at(0, 1).unwrap(), rock); // h = 20
        assert_eq!(terrain.color_at(2, 1).unwrap(), snow); // h = 30

        // Mid-band heights blend 50/50.
        assert_eq!(terrain.color_at(1, 0).unwrap(), sand.lerp(&grass, 0.5)); // h = 5
        assert_eq!(terrain.color_at(1, 1).unwrap(), rock.lerp(&snow, 0.5)); // h = 25

        // Above the last threshold: pure snow.
        assert_eq!(terrain.color_at(3, 1).unwrap(), snow); // h = 35
    }

    #[test]
    fn unconfigured_layers_shade_white() {
        let terrain = flat_terrain(4);
        assert_eq!(terrain.color_at(1, 1).unwrap(), Color::WHITE);
    }

    #[test]
    fn interpolated_height_uses_world_scale() {
        let samples = (0..16).map(|i| (i % 4) as f32).collect();
        let hm = HeightMap::from_samples(samples, 4).unwrap();
        let config = TerrainConfig {
            world_scale: 2.0,
            texture_scale: 1.0,
        };
        let terrain = Terrain::new(hm, config).unwrap();

        // Grid column 1 sits at world x = 2.
        assert_eq!(terrain.height_interpolated(2.0, 0.0), 1.0);
        // Halfway between columns 1 and 2 in world space.
        assert_eq!(terrain.height_interpolated(3.0, 0.0), 1.5);
        // Beyond the far edge clamps.
        assert_eq!(terrain.height_interpolated(100.0, 0.0), 3.0);
    }

    #[test]
    fn interpolated_matches_exact_at_grid_points() {
        let samples = (0..16).map(|i| (i * 7 % 5) as f32).collect();
        let hm = HeightMap::from_samples(samples, 4).unwrap();
        let config = TerrainConfig {
            world_scale: 3.0,
            texture_scale: 1.0,
        };
        let terrain = Terrain::new(hm, config).unwrap();

        for z in 0..4 {
            for x in 0..4 {
                let world = (x as f32 * 3.0, z as f32 * 3.0);
                assert_eq!(
                    terrain.height_interpolated(world.0, world.1),
                    terrain.height_at(x, z).unwrap()
                );
            }
        }
    }

    #[test]
    fn set_light_dir_refreshes_slope_info() {
        // A ramp ascending toward +x, lit from +x, then from -x.
        let samples = (0..16).map(|i| (i % 4) as f32).collect();
        let hm = HeightMap::from_samples(samples, 4).unwrap();
        let mut terrain = Terrain::new(hm, TerrainConfig::default()).unwrap();
        terrain.set_light(DirectionalLight {
            ambient_intensity: 0.1,
            diffuse_intensity: 0.5,
            direction: Vec3::new(-4.0, -1.0, 0.0),
            ..Default::default()
        });

        let lit = terrain.brightness_at(1, 1).unwrap();
        terrain.set_light_dir(Vec3::new(4.0, -1.0, 0.0));
        let shadowed = terrain.brightness_at(1, 1).unwrap();
        assert!(lit > shadowed);
    }
}
