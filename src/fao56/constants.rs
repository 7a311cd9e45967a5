/// solar constant [MJ m^-2 min^-1]
pub const SOLAR_CONSTANT: f64 = 0.0820;
/// Stefan-Boltzmann constant [MJ K^-4 m^-2 day^-1]
pub const STEFAN_BOLTZMANN: f64 = 4.903e-9;
/// albedo of the grass reference crop
pub const DEFAULT_ALBEDO: f64 = 0.23;
/// elevation of the reference station [m]
pub const DEFAULT_ALTITUDE: f64 = 8.0;
/// W m^-2 averaged over a day to MJ m^-2 day^-1
pub const W_M2_TO_MJ_M2_DAY: f64 = 0.0864;
/// soil heat flux for daily time steps [MJ m^-2 day^-1]
pub const SOIL_HEAT_FLUX: f64 = 0.0;
/// bounds of the Rs/Rso ratio used in the net longwave term
pub const MIN_CLEAR_SKY_RATIO: f64 = 0.3;
pub const MAX_CLEAR_SKY_RATIO: f64 = 1.0;
