//! The forecast-variable vocabulary of the Point Forecast API.

use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A forecast variable accepted by the Point Forecast API.
///
/// The known names cover the time-series vocabulary (atmospheric, wave, and
/// hydrodynamic quantities). The set is open: the non-time-series endpoint's
/// vocabulary is only partially documented, so any name outside the known
/// list round-trips through [`Variable::Other`] instead of being rejected.
///
/// Variables serialize to their dotted wire names, e.g.
/// `Variable::WaveHeight` becomes `"wave.height"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Variable {
    // -- atmospheric --
    AirHumidityAt2m,
    AirPressureAtSeaLevel,
    AirTemperatureAt2m,
    AirVisibility,
    AtmosphereConvectivePotentialEnergy,
    CloudBaseHeight,
    CloudCover,
    PrecipitationRate,
    RadiationFluxDownwardLongwave,
    RadiationFluxDownwardShortwave,
    WindDirectionAt10m,
    WindDirectionAt100m,
    WindSpeedAt10m,
    WindSpeedAt100m,
    WindSpeedEastwardAt10m,
    WindSpeedEastwardAt100m,
    WindSpeedGustAt10m,
    WindSpeedNorthwardAt10m,
    WindSpeedNorthwardAt100m,
    // -- wave --
    WaveHeight,
    WaveHeightMax,
    WaveDirectionPeak,
    WavePeriodPeak,
    WaveHeightAbove8s,
    WaveHeightBelow8s,
    WavePeriodAbove8sPeak,
    WavePeriodBelow8sPeak,
    WaveDirectionAbove8sPeak,
    WaveDirectionBelow8sPeak,
    WaveDirectionMean,
    WaveDirectionalSpread,
    WavePeriodTm01Mean,
    WavePeriodTm02Mean,
    // -- hydrodynamic --
    CurrentSpeedEastwardAtSeaSurface,
    CurrentSpeedEastwardAtSeaSurfaceNoTide,
    CurrentSpeedEastwardBarotropic,
    CurrentSpeedEastwardBarotropicNoTide,
    CurrentSpeedNorthwardAtSeaSurface,
    CurrentSpeedNorthwardAtSeaSurfaceNoTide,
    CurrentSpeedNorthwardBarotropic,
    CurrentSpeedNorthwardBarotropicNoTide,
    SeaTemperatureAtSurface,
    SeaTemperatureAtSurfaceAnomaly,
    /// A variable name not (yet) in the known vocabulary. Sent verbatim.
    Other(String),
}

impl Variable {
    /// The dotted wire name of this variable.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AirHumidityAt2m => "air.humidity.at-2m",
            Self::AirPressureAtSeaLevel => "air.pressure.at-sea-level",
            Self::AirTemperatureAt2m => "air.temperature.at-2m",
            Self::AirVisibility => "air.visibility",
            Self::AtmosphereConvectivePotentialEnergy => "atmosphere.convective.potential.energy",
            Self::CloudBaseHeight => "cloud.base.height",
            Self::CloudCover => "cloud.cover",
            Self::PrecipitationRate => "precipitation.rate",
            Self::RadiationFluxDownwardLongwave => "radiation.flux.downward.longwave",
            Self::RadiationFluxDownwardShortwave => "radiation.flux.downward.shortwave",
            Self::WindDirectionAt10m => "wind.direction.at-10m",
            Self::WindDirectionAt100m => "wind.direction.at-100m",
            Self::WindSpeedAt10m => "wind.speed.at-10m",
            Self::WindSpeedAt100m => "wind.speed.at-100m",
            Self::WindSpeedEastwardAt10m => "wind.speed.eastward.at-10m",
            Self::WindSpeedEastwardAt100m => "wind.speed.eastward.at-100m",
            Self::WindSpeedGustAt10m => "wind.speed.gust.at-10m",
            Self::WindSpeedNorthwardAt10m => "wind.speed.northward.at-10m",
            Self::WindSpeedNorthwardAt100m => "wind.speed.northward.at-100m",
            Self::WaveHeight => "wave.height",
            Self::WaveHeightMax => "wave.height.max",
            Self::WaveDirectionPeak => "wave.direction.peak",
            Self::WavePeriodPeak => "wave.period.peak",
            Self::WaveHeightAbove8s => "wave.height.above-8s",
            Self::WaveHeightBelow8s => "wave.height.below-8s",
            Self::WavePeriodAbove8sPeak => "wave.period.above-8s.peak",
            Self::WavePeriodBelow8sPeak => "wave.period.below-8s.peak",
            Self::WaveDirectionAbove8sPeak => "wave.direction.above-8s.peak",
            Self::WaveDirectionBelow8sPeak => "wave.direction.below-8s.peak",
            Self::WaveDirectionMean => "wave.direction.mean",
            Self::WaveDirectionalSpread => "wave.directional-spread",
            Self::WavePeriodTm01Mean => "wave.period.tm01.mean",
            Self::WavePeriodTm02Mean => "wave.period.tm02.mean",
            Self::CurrentSpeedEastwardAtSeaSurface => "current.speed.eastward.at-sea-surface",
            Self::CurrentSpeedEastwardAtSeaSurfaceNoTide => {
                "current.speed.eastward.at-sea-surface-no-tide"
            }
            Self::CurrentSpeedEastwardBarotropic => "current.speed.eastward.barotropic",
            Self::CurrentSpeedEastwardBarotropicNoTide => {
                "current.speed.eastward.barotropic-no-tide"
            }
            Self::CurrentSpeedNorthwardAtSeaSurface => "current.speed.northward.at-sea-surface",
            Self::CurrentSpeedNorthwardAtSeaSurfaceNoTide => {
                "current.speed.northward.at-sea-surface-no-tide"
            }
            Self::CurrentSpeedNorthwardBarotropic => "current.speed.northward.barotropic",
            Self::CurrentSpeedNorthwardBarotropicNoTide => {
                "current.speed.northward.barotropic-no-tide"
            }
            Self::SeaTemperatureAtSurface => "sea.temperature.at-surface",
            Self::SeaTemperatureAtSurfaceAnomaly => "sea.temperature.at-surface-anomaly",
            Self::Other(name) => name,
        }
    }

    /// Resolves a wire name into the known vocabulary, falling back to
    /// [`Variable::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "air.humidity.at-2m" => Self::AirHumidityAt2m,
            "air.pressure.at-sea-level" => Self::AirPressureAtSeaLevel,
            "air.temperature.at-2m" => Self::AirTemperatureAt2m,
            "air.visibility" => Self::AirVisibility,
            "atmosphere.convective.potential.energy" => Self::AtmosphereConvectivePotentialEnergy,
            "cloud.base.height" => Self::CloudBaseHeight,
            "cloud.cover" => Self::CloudCover,
            "precipitation.rate" => Self::PrecipitationRate,
            "radiation.flux.downward.longwave" => Self::RadiationFluxDownwardLongwave,
            "radiation.flux.downward.shortwave" => Self::RadiationFluxDownwardShortwave,
            "wind.direction.at-10m" => Self::WindDirectionAt10m,
            "wind.direction.at-100m" => Self::WindDirectionAt100m,
            "wind.speed.at-10m" => Self::WindSpeedAt10m,
            "wind.speed.at-100m" => Self::WindSpeedAt100m,
            "wind.speed.eastward.at-10m" => Self::WindSpeedEastwardAt10m,
            "wind.speed.eastward.at-100m" => Self::WindSpeedEastwardAt100m,
            "wind.speed.gust.at-10m" => Self::WindSpeedGustAt10m,
            "wind.speed.northward.at-10m" => Self::WindSpeedNorthwardAt10m,
            "wind.speed.northward.at-100m" => Self::WindSpeedNorthwardAt100m,
            "wave.height" => Self::WaveHeight,
            "wave.height.max" => Self::WaveHeightMax,
            "wave.direction.peak" => Self::WaveDirectionPeak,
            "wave.period.peak" => Self::WavePeriodPeak,
            "wave.height.above-8s" => Self::WaveHeightAbove8s,
            "wave.height.below-8s" => Self::WaveHeightBelow8s,
            "wave.period.above-8s.peak" => Self::WavePeriodAbove8sPeak,
            "wave.period.below-8s.peak" => Self::WavePeriodBelow8sPeak,
            "wave.direction.above-8s.peak" => Self::WaveDirectionAbove8sPeak,
            "wave.direction.below-8s.peak" => Self::WaveDirectionBelow8sPeak,
            "wave.direction.mean" => Self::WaveDirectionMean,
            "wave.directional-spread" => Self::WaveDirectionalSpread,
            "wave.period.tm01.mean" => Self::WavePeriodTm01Mean,
            "wave.period.tm02.mean" => Self::WavePeriodTm02Mean,
            "current.speed.eastward.at-sea-surface" => Self::CurrentSpeedEastwardAtSeaSurface,
            "current.speed.eastward.at-sea-surface-no-tide" => {
                Self::CurrentSpeedEastwardAtSeaSurfaceNoTide
            }
            "current.speed.eastward.barotropic" => Self::CurrentSpeedEastwardBarotropic,
            "current.speed.eastward.barotropic-no-tide" => {
                Self::CurrentSpeedEastwardBarotropicNoTide
            }
            "current.speed.northward.at-sea-surface" => Self::CurrentSpeedNorthwardAtSeaSurface,
            "current.speed.northward.at-sea-surface-no-tide" => {
                Self::CurrentSpeedNorthwardAtSeaSurfaceNoTide
            }
            "current.speed.northward.barotropic" => Self::CurrentSpeedNorthwardBarotropic,
            "current.speed.northward.barotropic-no-tide" => {
                Self::CurrentSpeedNorthwardBarotropicNoTide
            }
            "sea.temperature.at-surface" => Self::SeaTemperatureAtSurface,
            "sea.temperature.at-surface-anomaly" => Self::SeaTemperatureAtSurfaceAnomaly,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variable {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for Variable {
    fn from(s: &str) -> Self {
        Self::from_name(s)
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Variable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
