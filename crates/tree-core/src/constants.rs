// Shared layout and animation tuning constants used by both web and native frontends.

// Tree silhouette
pub const TREE_HEIGHT: f32 = 11.0; // tip at +H/2, base at -H/2
pub const TREE_RADIUS: f32 = 5.0; // foliage cone radius at the base
pub const TREE_APEX_Y: f32 = TREE_HEIGHT / 2.0;
pub const CONE_DEPTH_EXPONENT: f32 = 0.20; // < 1/3 biases samples towards the base

// Entity counts
pub const FOLIAGE_COUNT: usize = 14_000;
pub const BAUBLE_COUNT: usize = 150;
pub const GIFT_COUNT: usize = 40;
pub const BELL_COUNT: usize = 50;
pub const CRYSTAL_COUNT: usize = 60;
pub const BERRY_COUNT: usize = 300;
pub const FAIRY_LIGHT_COUNT: usize = 300;
pub const RIBBON_SEGMENT_COUNT: usize = 8;
pub const ATMOSPHERE_COUNT: usize = 100;
pub const SNOWFLAKE_COUNT: usize = 350;
pub const GOLD_DUST_COUNT: usize = 500;
pub const EMERALD_MOTE_COUNT: usize = 200;
pub const STARFIELD_COUNT: usize = 1000;
pub const MAX_DENSITY: f32 = 4.0; // upper bound for LayerCounts::scaled

// Scatter radii (outer layers scatter wider)
pub const FOLIAGE_SCATTER_RADIUS: f32 = 28.0;
pub const TRUNK_SCATTER_RADIUS: f32 = 25.0;
pub const ORNAMENT_SCATTER_RADIUS: f32 = 30.0;
pub const LIGHT_SCATTER_RADIUS: f32 = 30.0;
pub const RIBBON_SCATTER_RADIUS: f32 = 35.0;
pub const STAR_SCATTER_RADIUS: f32 = 25.0;
pub const ATMOSPHERE_RADIUS: f32 = 40.0;
pub const PHOTO_SCATTER_RADIUS: f32 = 30.0;

// Radial push-out applied to tree positions, innermost to outermost
pub const BERRY_PUSH: f32 = 1.1;
pub const BAUBLE_PUSH: f32 = 1.2;
pub const BELL_PUSH: f32 = 1.2;
pub const CRYSTAL_PUSH: f32 = 1.25;
pub const GIFT_PUSH: f32 = 1.3;

// Damping rates (1/s); higher settles faster
pub const FOLIAGE_DAMPING: f32 = 1.5;
pub const STAR_DAMPING: f32 = 1.5;
pub const ORNAMENT_DAMPING: f32 = 1.2;
pub const LIGHT_DAMPING: f32 = 1.0;
pub const RIBBON_DAMPING: f32 = 1.0;
pub const PHOTO_SCALE_DAMPING: f32 = 3.0;
pub const PHOTO_HOVER_DAMPING: f32 = 4.0;

// Foliage
pub const FOLIAGE_JITTER: f32 = 0.22; // breaks up the perfect cone
pub const FOLIAGE_SCATTERED_SCALE: f32 = 1.2;
pub const FOLIAGE_SETTLED_TILT: f32 = -0.5;
pub const BREATHE_BASE: f32 = 0.1; // breathing amplitude once assembled
pub const BREATHE_SCATTERED_EXTRA: f32 = 0.3; // added amplitude while scattered
pub const SWIRL_AMPLITUDE: f32 = 4.0; // radians of swirl at p = 0
pub const SWIRL_FREQUENCY: f32 = 0.1;
pub const TRUNK_TREE_POSITION: [f32; 3] = [0.0, -2.5, 0.0];
pub const GLOW_POSITION: [f32; 3] = [0.0, 1.0, 0.0];
pub const GLOW_RADIUS: f32 = 1.5;

// Fairy lights and ribbon spirals
pub const SPIRAL_RADIUS: f32 = 5.2; // slightly wider than the foliage
pub const LIGHT_TURNS: f32 = 6.5;
pub const LIGHT_BASE_SCALE: f32 = 0.08;
pub const RIBBON_TURNS: f32 = 3.5;
pub const RIBBON_GAP: f32 = 0.02; // spiral parameter left empty between segments
pub const RIBBON_CURVE_STEPS: usize = 30;
pub const RIBBON_BEADS_PER_SEGMENT: usize = 96;
pub const RIBBON_BEAD_RADIUS: f32 = 0.06;
pub const RIBBON_NOISE_FREQ: f32 = 15.0;
pub const RIBBON_NOISE_AMP: f32 = 0.15;

// Star
pub const STAR_SCATTERED_SCALE: f32 = 0.5;
pub const STAR_TREE_SCALE: f32 = 1.5;
pub const STAR_SETTLE_THRESHOLD: f32 = 0.8; // tumbles below this progress

// Photos
pub const PHOTO_RADIUS: f32 = 7.5; // floats outside the dense tree
pub const PHOTO_RADIUS_JITTER: f32 = 3.0;
pub const PHOTO_Y_MIN: f32 = -4.5;
pub const PHOTO_Y_MAX: f32 = 4.0;
pub const PHOTO_Y_JITTER: f32 = 2.5;
pub const PHOTO_Y_CLAMP: f32 = 5.2; // never above the apex
pub const PHOTOS_PER_ASCENT: usize = 12; // photos per climb from base to top
pub const PHOTO_ANGLE_STEP: f32 = 2.5;
pub const PHOTO_ANGLE_JITTER: f32 = 0.8;
pub const PHOTO_HOVER_SCALE: f32 = 1.8;
pub const PHOTO_CAROUSEL_SPEED: f32 = 0.02; // rad/s
pub const PHOTO_PICK_RADIUS: f32 = 0.9;
pub const PHOTO_MAX_DIMENSION: u32 = 8192; // larger uploads are rejected

// Sparkle fields and starfield
pub const SPARKLE_UNIT: f32 = 0.02; // world radius per unit of sparkle size
pub const SPARKLE_DRIFT: f32 = 0.1; // drift amplitude per unit of speed x box size
pub const STARFIELD_RADIUS: f32 = 80.0;
pub const STARFIELD_DEPTH: f32 = 40.0;
pub const STARFIELD_FACTOR: f32 = 3.0;
pub const STARFIELD_UNIT: f32 = 0.08;
pub const STARFIELD_TWINKLE_SPEED: f32 = 0.5;

// Camera
pub const CAMERA_DISTANCE: f32 = 14.0;
pub const CAMERA_MIN_DISTANCE: f32 = 8.0;
pub const CAMERA_MAX_DISTANCE: f32 = 25.0;
pub const CAMERA_HEIGHT: f32 = 2.0;
pub const CAMERA_TARGET_Y: f32 = 1.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_AUTO_ROTATE: f32 = 0.084; // rad/s while assembled
pub const CAMERA_AUTO_ROTATE_DAMPING: f32 = 2.0;

pub const MAX_POINT_LIGHTS: usize = 4;
