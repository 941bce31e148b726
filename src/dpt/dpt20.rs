//! DPT 20.xxx - 1-byte enumerations
//!
//! Each subtype is an [`EnumDpt`] constant over a static table. The wire
//! byte is the ordinal; unknown ordinals are rejected with an
//! enum-not-found error.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{dpt20, DataPointType, DataPointValue};
//!
//! let mode = dpt20::HVAC_MODE.parse(&[0x01])?;
//! assert_eq!(mode.name(), "Comfort");
//!
//! let eco = dpt20::HVAC_MODE.parse_syntax(&["Economy"])?;
//! assert_eq!(eco.to_payload().as_slice(), &[0x03]);
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use crate::dpt::EnumDpt;

enum_dpt! {
    /// DPT 20.001 - System clock mode
    SCLO_MODE = new("20.001", "SCLO mode") {
        0 => "Autonomous", "autonomous";
        1 => "Slave", "slave";
        2 => "Master", "master";
    }

    /// DPT 20.002 - Building mode
    BUILDING_MODE = new("20.002", "Building mode") {
        0 => "BuildingInUse", "Building in use";
        1 => "BuildingNotUsed", "Building not used";
        2 => "BuildingProtection", "Building protection";
    }

    /// DPT 20.003 - Occupancy mode
    OCCUPANCY_MODE = new("20.003", "Occupancy mode") {
        0 => "Occupied", "occupied";
        1 => "Standby", "standby";
        2 => "NotOccupied", "not occupied";
    }

    /// DPT 20.004 - Priority
    PRIORITY = new("20.004", "Priority") {
        0 => "High", "High";
        1 => "Medium", "Medium";
        2 => "Low", "Low";
        3 => "Void", "void";
    }

    /// DPT 20.005 - Light application mode
    LIGHT_APPLICATION_MODE = new("20.005", "Light application mode") {
        0 => "Normal", "normal";
        1 => "PresenceSimulation", "presence simulation";
        2 => "NightRound", "night round";
    }

    /// DPT 20.007 - Alarm class type
    ALARM_CLASS_TYPE = new("20.007", "Alarm class type") {
        1 => "SimpleAlarm", "simple alarm";
        2 => "BasicAlarm", "basic alarm";
        3 => "ExtendedAlarm", "extended alarm";
    }

    /// DPT 20.008 - PSU mode
    PSU_MODE = new("20.008", "PSU mode") {
        0 => "Disabled", "disabled (PSU/DPSU fixed off)";
        1 => "Enabled", "enabled (PSU/DPSU fixed on)";
        2 => "Auto", "auto (PSU/DPSU automatic on/off)";
    }

    /// DPT 20.012 - Error class HVAC
    ERROR_CLASS_HVAC = new("20.012", "Error class HVAC") {
        0 => "NoFault", "no fault";
        1 => "SensorFault", "sensor fault";
        2 => "ProcessFault", "process fault / controller fault";
        3 => "ActuatorFault", "actuator fault";
        4 => "OtherFault", "other fault";
    }

    /// DPT 20.013 - Time delay
    TIME_DELAY = new("20.013", "Time delay") {
        0 => "NotActive", "not active";
        1 => "Delay1s", "1 s";
        2 => "Delay2s", "2 s";
        3 => "Delay3s", "3 s";
        4 => "Delay5s", "5 s";
        5 => "Delay10s", "10 s";
        6 => "Delay15s", "15 s";
        7 => "Delay20s", "20 s";
        8 => "Delay30s", "30 s";
        9 => "Delay45s", "45 s";
        10 => "Delay1min", "1 min";
        11 => "Delay1min15s", "1.25 min";
        12 => "Delay1min30s", "1.5 min";
        13 => "Delay2min", "2 min";
        14 => "Delay2min30s", "2.5 min";
        15 => "Delay3min", "3 min";
        16 => "Delay5min", "5 min";
        17 => "Delay15min", "15 min";
        18 => "Delay20min", "20 min";
        19 => "Delay30min", "30 min";
        20 => "Delay1h", "1 h";
        21 => "Delay2h", "2 h";
        22 => "Delay3h", "3 h";
        23 => "Delay5h", "5 h";
        24 => "Delay12h", "12 h";
        25 => "Delay24h", "24 h";
    }

    /// DPT 20.014 - Beaufort wind force scale
    BEAUFORT_WIND_FORCE_SCALE = new("20.014", "Beaufort wind force scale") {
        0 => "Calm", "calm (no wind)";
        1 => "LightAir", "light air";
        2 => "LightBreeze", "light breeze";
        3 => "GentleBreeze", "gentle breeze";
        4 => "ModerateBreeze", "moderate breeze";
        5 => "FreshBreeze", "fresh breeze";
        6 => "StrongBreeze", "strong breeze";
        7 => "NearGale", "near gale / moderate gale";
        8 => "FreshGale", "fresh gale";
        9 => "StrongGale", "strong gale";
        10 => "WholeGale", "whole gale / storm";
        11 => "ViolentStorm", "violent storm";
        12 => "Hurricane", "hurricane";
    }

    /// DPT 20.017 - Sensor select
    SENSOR_SELECT = new("20.017", "Sensor select") {
        0 => "Inactive", "inactive";
        1 => "DigitalInputNotInverted", "digital input not inverted";
        2 => "DigitalInputInverted", "digital input inverted";
        3 => "AnalogInput", "analog input -> 0 % to 100%";
        4 => "TemperatureSensorInput", "temperature sensor input";
    }

    /// DPT 20.020 - Actuator connect type
    ACTUATOR_CONNECT_TYPE = new("20.020", "Actuator connect type") {
        1 => "SensorConnection", "Sensor Connection";
        2 => "ControllerConnection", "Controller Connection";
    }

    /// DPT 20.100 - Fuel type
    FUEL_TYPE = new("20.100", "Fuel type") {
        0 => "Auto", "auto";
        1 => "Oil", "oil";
        2 => "Gas", "gas";
        3 => "SolidStateFuel", "solid state fuel";
    }

    /// DPT 20.101 - Burner type
    BURNER_TYPE = new("20.101", "Burner type") {
        0 => "Reserved", "reserved";
        1 => "OneStage", "1 stage";
        2 => "TwoStage", "2 stage";
        3 => "Modulating", "modulating";
    }

    /// DPT 20.102 - HVAC mode
    HVAC_MODE = new("20.102", "HVAC mode") {
        0 => "Auto", "Auto";
        1 => "Comfort", "Comfort";
        2 => "Standby", "Standby";
        3 => "Economy", "Economy";
        4 => "BuildingProtection", "Building Protection";
    }

    /// DPT 20.103 - Domestic hot water mode
    DHW_MODE = new("20.103", "DHW mode") {
        0 => "Auto", "Auto";
        1 => "LegioProtect", "LegioProtect";
        2 => "Normal", "Normal";
        3 => "Reduced", "Reduced";
        4 => "OffFrostProtect", "Off/FrostProtect";
    }

    /// DPT 20.104 - Load priority
    LOAD_PRIORITY = new("20.104", "Load priority") {
        0 => "None", "None";
        1 => "ShiftLoadPriority", "Shift load priority";
        2 => "AbsoluteLoadPriority", "Absolute load priority";
    }

    /// DPT 20.105 - HVAC control mode
    HVAC_CONTROL_MODE = new("20.105", "HVAC control mode") {
        0 => "Auto", "Auto";
        1 => "Heat", "Heat";
        2 => "MorningWarmup", "Morning Warmup";
        3 => "Cool", "Cool";
        4 => "NightPurge", "Night Purge";
        5 => "Precool", "Precool";
        6 => "Off", "Off";
        7 => "Test", "Test";
        8 => "EmergencyHeat", "Emergency Heat";
        9 => "FanOnly", "Fan only";
        10 => "FreeCool", "Free Cool";
        11 => "Ice", "Ice";
        12 => "MaximumHeatingMode", "Maximum Heating Mode";
        13 => "EconomicHeatCoolMode", "Economic Heat/Cool Mode";
        14 => "Dehumidification", "Dehumidification";
        15 => "CalibrationMode", "Calibration Mode";
        16 => "EmergencyCoolMode", "Emergency Cool Mode";
        17 => "EmergencySteamMode", "Emergency Steam Mode";
        20 => "NoDem", "NoDem";
    }

    /// DPT 20.106 - HVAC emergency mode
    HVAC_EMERGENCY_MODE = new("20.106", "HVAC emergency mode") {
        0 => "Normal", "Normal";
        1 => "EmergPressure", "EmergPressure";
        2 => "EmergDepressure", "EmergDepressure";
        3 => "EmergPurge", "EmergPurge";
        4 => "EmergShutdown", "EmergShutdown";
        5 => "EmergFire", "EmergFire";
    }

    /// DPT 20.107 - Changeover mode
    CHANGEOVER_MODE = new("20.107", "Changeover mode") {
        0 => "Auto", "Auto";
        1 => "CoolingOnly", "CoolingOnly";
        2 => "HeatingOnly", "HeatingOnly";
    }

    /// DPT 20.108 - Valve mode
    VALVE_MODE = new("20.108", "Valve mode") {
        1 => "HeatStageA", "Heat stage A for normal heating";
        2 => "HeatStageB", "Heat stage B for heating with two stages (A + B)";
        3 => "CoolStageA", "Cool stage A for normal cooling";
        4 => "CoolStageB", "Cool stage B for cooling with two stages (A + B)";
        5 => "HeatCool", "Heat/Cool for changeover applications";
    }

    /// DPT 20.109 - Damper mode
    DAMPER_MODE = new("20.109", "Damper mode") {
        1 => "FreshAir", "Fresh air, e.g. for fancoils";
        2 => "SupplyAir", "Supply Air. e.g. for VAV";
        3 => "ExtractAir", "Extract Air, e.g. for VAV";
    }

    /// DPT 20.110 - Heater mode
    HEATER_MODE = new("20.110", "Heater mode") {
        1 => "HeatStageAOnOff", "Heat Stage A On/Off";
        2 => "HeatStageAProportional", "Heat Stage A Proportional";
        3 => "HeatStageBProportional", "Heat Stage B Proportional";
    }

    /// DPT 20.111 - Fan mode
    FAN_MODE = new("20.111", "Fan mode") {
        0 => "NotRunning", "not running";
        1 => "PermanentlyRunning", "permanently running";
        2 => "RunningInIntervals", "running in intervals";
    }

    /// DPT 20.112 - Master/slave mode
    MASTER_SLAVE_MODE = new("20.112", "Master/slave mode") {
        0 => "Autonomous", "autonomous";
        1 => "Master", "master";
        2 => "Slave", "slave";
    }

    /// DPT 20.113 - Status room setpoint
    STATUS_ROOM_SETPOINT = new("20.113", "Status room setpoint") {
        0 => "NormalSetpoint", "normal setpoint";
        1 => "AlternativeSetpoint", "alternative setpoint";
        2 => "BuildingProtectionSetpoint", "building protection setpoint";
    }

    /// DPT 20.600 - Behaviour lock/unlock
    BEHAVIOUR_LOCK_UNLOCK = new("20.600", "Behaviour lock/unlock") {
        0 => "Off", "off";
        1 => "On", "on";
        2 => "NoChange", "no change";
        3 => "ValueAccordingAdditionalParameter", "value according additional parameter";
        4 => "MemoryFunctionValue", "memory function value";
        5 => "UpdatedValue", "updated value";
        6 => "ValueBeforeLocking", "value before locking";
    }

    /// DPT 20.601 - Behaviour bus power up/down
    BEHAVIOUR_BUS_POWER_UP_DOWN = new("20.601", "Behaviour bus power up/down") {
        0 => "Up", "up";
        1 => "Down", "down";
        2 => "NoChange", "no change";
        3 => "ValueAccordingAdditionalParameter", "value according additional parameter";
        4 => "Last", "last (value before bus power down)";
    }

    /// DPT 20.602 - DALI fade time
    DALI_FADE_TIME = new("20.602", "DALI fade time") {
        0 => "NoFade", "0 s (no fade)";
        1 => "Fade0_7s", "0.7 s";
        2 => "Fade1_0s", "1.0 s";
        3 => "Fade1_4s", "1.4 s";
        4 => "Fade2_0s", "2.0 s";
        5 => "Fade2_8s", "2.8 s";
        6 => "Fade4_0s", "4.0 s";
        7 => "Fade5_7s", "5.7 s";
        8 => "Fade8_0s", "8.0 s";
        9 => "Fade11_3s", "11.3 s";
        10 => "Fade16_0s", "16.0 s";
        11 => "Fade22_6s", "22.6 s";
        12 => "Fade32_0s", "32.0 s";
        13 => "Fade45_3s", "45.3 s";
        14 => "Fade64_0s", "64.0 s";
        15 => "Fade90_5s", "90.5 s";
    }

    /// DPT 20.603 - Blinking mode
    BLINKING_MODE = new("20.603", "Blinking mode") {
        0 => "BlinkingDisabled", "Blinking Disabled";
        1 => "WithoutAcknowledge", "Without Acknowledge";
        2 => "BlinkingWithAcknowledge", "Blinking With Acknowledge";
    }

    /// DPT 20.604 - Light control mode
    LIGHT_CONTROL_MODE = new("20.604", "Light control mode") {
        0 => "AutomaticLightControl", "automatic light control";
        1 => "ManualLightControl", "manual light control";
    }

    /// DPT 20.605 - Switch push button model
    SWITCH_PB_MODEL = new("20.605", "Switch PB model") {
        1 => "OnePushButton", "one PB/binary input mode";
        2 => "TwoPushButtons", "two PBs/binary inputs mode";
    }

    /// DPT 20.606 - Push button action
    PB_ACTION = new("20.606", "PB action") {
        0 => "Inactive", "inactive (no message sent)";
        1 => "SwitchOff", "SwitchOff message sent";
        2 => "SwitchOn", "SwitchOn message sent";
        3 => "InverseValue", "inverse value of InfoOnOff is sent";
    }
}

/// Every DPT 20 subtype provided by this module
pub const SUBTYPES: &[EnumDpt<'static>] = &[
    SCLO_MODE,
    BUILDING_MODE,
    OCCUPANCY_MODE,
    PRIORITY,
    LIGHT_APPLICATION_MODE,
    ALARM_CLASS_TYPE,
    PSU_MODE,
    ERROR_CLASS_HVAC,
    TIME_DELAY,
    BEAUFORT_WIND_FORCE_SCALE,
    SENSOR_SELECT,
    ACTUATOR_CONNECT_TYPE,
    FUEL_TYPE,
    BURNER_TYPE,
    HVAC_MODE,
    DHW_MODE,
    LOAD_PRIORITY,
    HVAC_CONTROL_MODE,
    HVAC_EMERGENCY_MODE,
    CHANGEOVER_MODE,
    VALVE_MODE,
    DAMPER_MODE,
    HEATER_MODE,
    FAN_MODE,
    MASTER_SLAVE_MODE,
    STATUS_ROOM_SETPOINT,
    BEHAVIOUR_LOCK_UNLOCK,
    BEHAVIOUR_BUS_POWER_UP_DOWN,
    DALI_FADE_TIME,
    BLINKING_MODE,
    LIGHT_CONTROL_MODE,
    SWITCH_PB_MODEL,
    PB_ACTION,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpt::{DataPointType, DataPointValue};

    #[test]
    fn test_hvac_mode() {
        let value = HVAC_MODE.parse(&[0x04]).unwrap();
        assert_eq!(value.name(), "BuildingProtection");
        assert_eq!(value.to_string(), "Building Protection");
        assert_eq!(HVAC_MODE.parse_syntax(&["Building", "Protection"]).unwrap().ordinal(), 4);
        assert!(HVAC_MODE.parse(&[0x05]).unwrap_err().is_enum_not_found());
    }

    #[test]
    fn test_sparse_table() {
        assert_eq!(HVAC_CONTROL_MODE.parse(&[20]).unwrap().name(), "NoDem");
        assert!(HVAC_CONTROL_MODE.parse(&[18]).unwrap_err().is_enum_not_found());
        assert!(ALARM_CLASS_TYPE.parse(&[0]).unwrap_err().is_enum_not_found());
    }

    #[test]
    fn test_every_entry_round_trips() {
        for dpt in SUBTYPES {
            assert!(dpt.identifier().starts_with("20."));
            for entry in dpt.registry().entries() {
                let value = dpt.parse(&[entry.ordinal()]).unwrap();
                assert_eq!(value.to_payload().as_slice(), &[entry.ordinal()]);
                assert_eq!(dpt.parse_syntax(&[entry.name()]).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_unique_identifiers() {
        for (i, a) in SUBTYPES.iter().enumerate() {
            for b in &SUBTYPES[i + 1..] {
                assert_ne!(a.identifier(), b.identifier());
            }
        }
    }
}
