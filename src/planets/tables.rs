//! Truncated VSOP87D series for the eight major planets.
//!
//! Each block holds `(amplitude, phase, frequency)` triples: amplitude in AU (radius) or
//! radians (longitude, latitude), phase in radians, frequency in radians per Julian
//! millennium. Block `k` is multiplied by `τᵏ`. Only the dominant terms are retained.
use super::{Term, VsopModel};

#[rustfmt::skip]
const MERCURY_L0: &[Term] = &[
    (4.4025071, 0.0, 0.0),
    (0.40989415, 1.48302034, 26087.90314157),
    (0.05046294, 4.4778549, 52175.8062831),
    (0.00855347, 1.165203, 78263.709425),
    (0.0016559, 4.119692, 104351.612566),
    (0.00034562, 0.77931, 130439.51571),
    (0.00007583, 3.7135, 156527.4188),
    (0.0000356, 1.512, 1109.3786),
    (0.00001803, 4.1033, 5661.332),
    (0.00001726, 0.3583, 182615.322),
    (0.0000159, 2.9951, 25028.5212),
    (0.00001365, 4.5992, 27197.2817),
    (0.00001017, 0.8803, 31749.2352),
    (0.00000714, 1.541, 24978.525),
    (0.00000644, 5.303, 21535.95),
    (0.00000451, 6.05, 51116.424),
    (0.00000404, 3.282, 208703.225),
    (0.00000352, 5.242, 20426.571),
    (0.00000345, 2.792, 15874.618),
    (0.00000343, 5.765, 955.6),
    (0.00000339, 5.863, 25558.212),
    (0.00000325, 1.337, 53285.185),
    (0.00000273, 2.495, 529.691),
    (0.00000264, 3.917, 57837.138),
    (0.0000026, 0.987, 4551.953),
    (0.00000239, 0.113, 1059.382),
    (0.00000235, 0.267, 11322.664),
    (0.00000217, 0.66, 13521.751),
    (0.00000209, 2.092, 47623.853),
    (0.00000183, 2.629, 27043.503),
    (0.00000182, 2.434, 25661.305),
    (0.00000176, 4.536, 51066.428),
    (0.00000173, 2.452, 24498.83),
    (0.00000142, 3.36, 37410.567),
    (0.00000138, 0.291, 10213.286),
    (0.00000125, 3.721, 39609.655),
    (0.00000118, 2.781, 77204.327),
    (0.00000106, 4.206, 19804.827),
];

#[rustfmt::skip]
const MERCURY_L1: &[Term] = &[
    (26088.14706223, 0.0, 0.0),
    (0.01126008, 6.2170397, 26087.9031416),
    (0.00303471, 3.055655, 52175.806283),
    (0.00080538, 6.10455, 78263.70942),
    (0.00021245, 2.83532, 104351.61257),
    (0.00005592, 5.8268, 130439.5157),
    (0.00001472, 2.5185, 156527.4188),
    (0.00000388, 5.48, 182615.322),
    (0.00000352, 3.052, 1109.379),
    (0.00000103, 2.149, 24978.525),
    (0.00000094, 6.12, 27197.28),
];

#[rustfmt::skip]
const MERCURY_L2: &[Term] = &[
    (0.0005305, 0.0, 0.0),
    (0.00016904, 4.69072, 26087.90314),
    (0.00007397, 1.3474, 52175.8063),
    (0.00003018, 4.4564, 78263.7094),
    (0.00001107, 1.2623, 104351.6126),
    (0.00000378, 4.32, 130439.516),
    (0.00000123, 1.069, 156527.419),
    (0.00000039, 4.08, 182615.32),
    (0.00000015, 4.63, 1109.38),
    (0.00000012, 0.79, 24978.52),
];

#[rustfmt::skip]
const MERCURY_L3: &[Term] = &[
    (0.00000188, 0.035, 52175.806),
    (0.00000142, 3.125, 26087.903),
    (0.00000097, 3.0, 78263.71),
    (0.00000044, 6.02, 104351.61),
    (0.00000035, 0.0, 0.0),
    (0.00000018, 2.78, 130439.52),
    (0.00000007, 5.82, 156527.42),
    (0.00000003, 2.57, 182615.32),
];

#[rustfmt::skip]
const MERCURY_L4: &[Term] = &[
    (0.00000114, 3.1416, 0.0),
    (0.00000003, 2.03, 26087.9),
    (0.00000002, 1.42, 78263.71),
    (0.00000002, 4.5, 52175.81),
    (0.00000001, 4.5, 104351.61),
    (0.00000001, 1.27, 130439.52),
];

#[rustfmt::skip]
const MERCURY_L5: &[Term] = &[
    (0.00000001, 3.14, 0.0),
];

#[rustfmt::skip]
const MERCURY_B0: &[Term] = &[
    (0.11737529, 1.98357499, 26087.90314157),
    (0.02388077, 5.0373896, 52175.8062831),
    (0.0122284, 3.1415927, 0.0),
    (0.00543252, 1.796444, 78263.709425),
    (0.00129779, 4.832325, 104351.612566),
    (0.00031867, 1.58088, 130439.51571),
    (0.00007963, 4.6097, 156527.4188),
    (0.00002014, 1.3532, 182615.322),
    (0.00000514, 4.378, 208703.225),
    (0.00000209, 2.02, 24978.525),
    (0.00000208, 4.918, 27197.282),
    (0.00000132, 1.119, 234791.128),
    (0.00000121, 1.813, 53285.185),
    (0.000001, 5.657, 20426.571),
];

#[rustfmt::skip]
const MERCURY_B1: &[Term] = &[
    (0.00429151, 3.501698, 26087.903142),
    (0.00146234, 3.141593, 0.0),
    (0.00022675, 0.01515, 52175.80628),
    (0.00010895, 0.4854, 78263.70942),
    (0.00006353, 3.4294, 104351.6126),
    (0.00002496, 0.1605, 130439.5157),
    (0.0000086, 3.185, 156527.419),
    (0.00000278, 6.21, 182615.322),
    (0.00000086, 2.95, 208703.23),
    (0.00000028, 0.29, 27197.28),
    (0.00000026, 5.98, 234791.13),
];

#[rustfmt::skip]
const MERCURY_B2: &[Term] = &[
    (0.00011831, 4.79066, 26087.90314),
    (0.00001914, 0.0, 0.0),
    (0.00001045, 1.2122, 52175.8063),
    (0.00000266, 4.434, 78263.709),
    (0.0000017, 1.623, 104351.613),
    (0.00000096, 4.8, 130439.52),
    (0.00000045, 1.61, 156527.42),
    (0.00000018, 4.67, 182615.32),
    (0.00000007, 1.43, 208703.23),
];

#[rustfmt::skip]
const MERCURY_B3: &[Term] = &[
    (0.00000235, 0.354, 26087.903),
    (0.00000161, 0.0, 0.0),
    (0.00000019, 4.36, 52175.81),
    (0.00000006, 2.51, 78263.71),
    (0.00000005, 6.14, 104351.61),
    (0.00000003, 3.12, 130439.52),
    (0.00000002, 6.27, 156527.42),
];

#[rustfmt::skip]
const MERCURY_B4: &[Term] = &[
    (0.00000004, 1.75, 26087.9),
    (0.00000001, 3.14, 0.0),
];

#[rustfmt::skip]
const MERCURY_R0: &[Term] = &[
    (0.39528272, 0.0, 0.0),
    (0.07834132, 6.1923372, 26087.9031416),
    (0.00795526, 2.959897, 52175.806283),
    (0.00121282, 6.010642, 78263.709425),
    (0.00021922, 2.7782, 104351.61257),
    (0.00004354, 5.8289, 130439.5157),
    (0.00000918, 2.597, 156527.419),
    (0.0000029, 1.424, 25028.521),
    (0.0000026, 3.028, 27197.282),
    (0.00000202, 5.647, 182615.322),
    (0.00000201, 5.592, 31749.235),
    (0.00000142, 6.253, 24978.525),
    (0.000001, 3.734, 21535.95),
];

#[rustfmt::skip]
const MERCURY_R1: &[Term] = &[
    (0.00217348, 4.656172, 26087.903142),
    (0.00044142, 1.42386, 52175.80628),
    (0.00010094, 4.47466, 78263.70942),
    (0.00002433, 1.2423, 104351.6126),
    (0.00001624, 0.0, 0.0),
    (0.00000604, 4.293, 130439.516),
    (0.00000153, 1.061, 156527.419),
    (0.00000039, 4.11, 182615.32),
];

#[rustfmt::skip]
const MERCURY_R2: &[Term] = &[
    (0.00003118, 3.0823, 26087.9031),
    (0.00001245, 6.1518, 52175.8063),
    (0.00000425, 2.926, 78263.709),
    (0.00000136, 5.98, 104351.613),
    (0.00000042, 2.75, 130439.52),
    (0.00000022, 3.14, 0.0),
    (0.00000013, 5.8, 156527.42),
];

#[rustfmt::skip]
const MERCURY_R3: &[Term] = &[
    (0.00000033, 1.68, 26087.9),
    (0.00000024, 4.63, 52175.81),
    (0.00000012, 1.39, 78263.71),
    (0.00000005, 4.44, 104351.61),
    (0.00000002, 1.21, 130439.52),
];

pub(super) static MERCURY: VsopModel = VsopModel {
    lon: &[MERCURY_L0, MERCURY_L1, MERCURY_L2, MERCURY_L3, MERCURY_L4, MERCURY_L5],
    lat: &[MERCURY_B0, MERCURY_B1, MERCURY_B2, MERCURY_B3, MERCURY_B4],
    rad: &[MERCURY_R0, MERCURY_R1, MERCURY_R2, MERCURY_R3],
};

#[rustfmt::skip]
const VENUS_L0: &[Term] = &[
    (3.17614667, 0.0, 0.0),
    (0.01353968, 5.5931332, 10213.2855462),
    (0.00089892, 5.3065, 20426.57109),
    (0.00005477, 4.4163, 7860.4194),
    (0.00003456, 2.6996, 11790.6291),
    (0.00002372, 2.9938, 3930.2097),
    (0.00001664, 4.2502, 1577.3435),
    (0.00001438, 4.1575, 9683.5946),
    (0.00001317, 5.1867, 26.2983),
    (0.00001201, 6.1536, 30639.8566),
    (0.00000769, 0.816, 9437.763),
    (0.00000761, 1.95, 529.691),
    (0.00000708, 1.065, 775.523),
    (0.00000585, 3.998, 191.448),
    (0.000005, 4.123, 15720.839),
    (0.00000429, 3.586, 19367.189),
    (0.00000327, 5.677, 5507.553),
    (0.00000326, 4.591, 10404.734),
    (0.00000232, 3.163, 9153.904),
    (0.0000018, 4.653, 1109.379),
    (0.00000155, 5.57, 19651.048),
    (0.00000128, 4.226, 20.775),
    (0.00000128, 0.962, 5661.332),
    (0.00000106, 1.537, 801.821),
];

#[rustfmt::skip]
const VENUS_L1: &[Term] = &[
    (10213.52943053, 0.0, 0.0),
    (0.00095708, 2.46424, 10213.28555),
    (0.00014445, 0.51625, 20426.57109),
    (0.00000213, 1.795, 30639.857),
    (0.00000174, 2.655, 26.298),
    (0.00000152, 6.106, 1577.344),
    (0.00000082, 5.7, 191.45),
    (0.0000007, 2.68, 9437.76),
    (0.00000052, 3.6, 775.52),
    (0.00000038, 1.03, 529.69),
    (0.0000003, 1.25, 5507.55),
    (0.00000025, 6.11, 10404.73),
];

#[rustfmt::skip]
const VENUS_L2: &[Term] = &[
    (0.00054127, 0.0, 0.0),
    (0.00003891, 0.3451, 10213.2855),
    (0.00001338, 2.0201, 20426.5711),
    (0.00000024, 2.05, 26.3),
    (0.00000019, 3.54, 30639.86),
    (0.0000001, 3.97, 775.52),
    (0.00000007, 1.52, 1577.34),
    (0.00000006, 1.0, 191.45),
];

#[rustfmt::skip]
const VENUS_L3: &[Term] = &[
    (0.00000136, 4.804, 10213.286),
    (0.00000078, 3.67, 20426.57),
    (0.00000026, 0.0, 0.0),
];

#[rustfmt::skip]
const VENUS_L4: &[Term] = &[
    (0.00000114, 3.1416, 0.0),
    (0.00000003, 5.21, 20426.57),
    (0.00000002, 2.51, 10213.29),
];

#[rustfmt::skip]
const VENUS_L5: &[Term] = &[
    (0.00000001, 3.14, 0.0),
];

#[rustfmt::skip]
const VENUS_B0: &[Term] = &[
    (0.05923638, 0.2670278, 10213.2855462),
    (0.00040108, 1.14737, 20426.57109),
    (0.00032815, 3.14159, 0.0),
    (0.00001011, 1.0895, 30639.8566),
    (0.00000149, 6.254, 18073.705),
    (0.00000138, 0.86, 1577.344),
    (0.0000013, 3.672, 9437.763),
    (0.0000012, 3.705, 2352.866),
    (0.00000108, 4.539, 22003.915),
];

#[rustfmt::skip]
const VENUS_B1: &[Term] = &[
    (0.00513348, 1.803643, 10213.285546),
    (0.0000438, 3.3862, 20426.5711),
    (0.00000199, 0.0, 0.0),
    (0.00000197, 2.53, 30639.857),
];

#[rustfmt::skip]
const VENUS_B2: &[Term] = &[
    (0.00022378, 3.38509, 10213.28555),
    (0.00000282, 0.0, 0.0),
    (0.00000173, 5.256, 20426.571),
    (0.00000027, 3.87, 30639.86),
];

#[rustfmt::skip]
const VENUS_B3: &[Term] = &[
    (0.00000647, 4.992, 10213.286),
    (0.0000002, 3.14, 0.0),
    (0.00000006, 0.77, 20426.57),
    (0.00000003, 5.44, 30639.86),
];

#[rustfmt::skip]
const VENUS_B4: &[Term] = &[
    (0.00000014, 0.32, 10213.29),
];

#[rustfmt::skip]
const VENUS_R0: &[Term] = &[
    (0.72334821, 0.0, 0.0),
    (0.00489824, 4.021518, 10213.285546),
    (0.00001658, 4.9021, 20426.5711),
    (0.00001632, 2.8455, 7860.4194),
    (0.00001378, 1.1285, 11790.6291),
    (0.00000498, 2.587, 9683.595),
    (0.00000374, 1.423, 3930.21),
    (0.00000264, 5.529, 9437.763),
    (0.00000237, 2.551, 15720.839),
    (0.00000222, 2.013, 19367.189),
    (0.00000126, 2.728, 1577.344),
    (0.00000119, 3.02, 10404.734),
];

#[rustfmt::skip]
const VENUS_R1: &[Term] = &[
    (0.00034551, 0.89199, 10213.28555),
    (0.00000234, 1.772, 20426.571),
    (0.00000234, 3.142, 0.0),
];

#[rustfmt::skip]
const VENUS_R2: &[Term] = &[
    (0.00001407, 5.0637, 10213.2855),
    (0.00000016, 5.47, 20426.57),
    (0.00000013, 0.0, 0.0),
];

#[rustfmt::skip]
const VENUS_R3: &[Term] = &[
    (0.0000005, 3.22, 10213.29),
];

#[rustfmt::skip]
const VENUS_R4: &[Term] = &[
    (0.00000001, 0.92, 10213.29),
];

pub(super) static VENUS: VsopModel = VsopModel {
    lon: &[VENUS_L0, VENUS_L1, VENUS_L2, VENUS_L3, VENUS_L4, VENUS_L5],
    lat: &[VENUS_B0, VENUS_B1, VENUS_B2, VENUS_B3, VENUS_B4],
    rad: &[VENUS_R0, VENUS_R1, VENUS_R2, VENUS_R3, VENUS_R4],
};

#[rustfmt::skip]
const EARTH_L0: &[Term] = &[
    (1.75347046, 0.0, 0.0),
    (0.03341656, 4.6692568, 6283.07585),
    (0.00034894, 4.6261, 12566.1517),
    (0.00003497, 2.7441, 5753.3849),
    (0.00003418, 2.8289, 3.5231),
    (0.00003136, 3.6277, 77713.7715),
    (0.00002676, 4.4181, 7860.4194),
    (0.00002343, 6.1352, 3930.2097),
    (0.00001324, 0.7425, 11506.7698),
    (0.00001273, 2.0371, 529.691),
    (0.00001199, 1.1096, 1577.3435),
    (0.0000099, 5.233, 5884.927),
    (0.00000902, 2.045, 26.298),
    (0.00000857, 3.508, 398.149),
    (0.0000078, 1.179, 5223.694),
    (0.00000753, 2.533, 5507.553),
    (0.00000505, 4.583, 18849.228),
    (0.00000492, 4.205, 775.523),
    (0.00000357, 2.92, 0.067),
    (0.00000317, 5.849, 11790.629),
    (0.00000284, 1.899, 796.298),
    (0.00000271, 0.315, 10977.079),
    (0.00000243, 0.345, 5486.778),
    (0.00000206, 4.806, 2544.314),
    (0.00000205, 1.869, 5573.143),
    (0.00000202, 2.458, 6069.777),
    (0.00000156, 0.833, 213.299),
    (0.00000132, 3.411, 2942.463),
    (0.00000126, 1.083, 20.775),
    (0.00000115, 0.645, 0.98),
    (0.00000103, 0.636, 4694.003),
    (0.00000102, 0.976, 15720.839),
    (0.00000102, 4.267, 7.114),
    (0.00000099, 6.21, 2146.17),
    (0.00000098, 0.68, 155.42),
    (0.00000086, 5.98, 161000.69),
    (0.00000085, 1.3, 6275.96),
    (0.00000085, 3.67, 71430.7),
    (0.0000008, 1.81, 17260.15),
    (0.00000079, 3.04, 12036.46),
    (0.00000075, 1.76, 5088.63),
    (0.00000074, 3.5, 3154.69),
    (0.00000074, 4.68, 801.82),
    (0.0000007, 0.83, 9437.76),
    (0.00000062, 3.98, 8827.39),
    (0.00000061, 1.82, 7084.9),
    (0.00000057, 2.78, 6286.6),
    (0.00000056, 4.39, 14143.5),
    (0.00000056, 3.47, 6279.55),
    (0.00000052, 0.19, 12139.55),
    (0.00000052, 1.33, 1748.02),
    (0.00000051, 0.28, 5856.48),
    (0.00000049, 0.49, 1194.45),
    (0.00000041, 5.37, 8429.24),
    (0.00000041, 2.4, 19651.05),
    (0.00000039, 6.17, 10447.39),
    (0.00000037, 6.04, 10213.29),
    (0.00000037, 2.57, 1059.38),
    (0.00000036, 1.71, 2352.87),
    (0.00000036, 1.78, 6812.77),
    (0.00000033, 0.59, 17789.85),
    (0.0000003, 0.44, 83996.85),
    (0.0000003, 2.74, 1349.87),
    (0.00000025, 3.16, 4690.48),
];

#[rustfmt::skip]
const EARTH_L1: &[Term] = &[
    (6283.31966747, 0.0, 0.0),
    (0.00206059, 2.678235, 6283.07585),
    (0.00004303, 2.6351, 12566.1517),
    (0.00000425, 1.59, 3.523),
    (0.00000119, 5.796, 26.298),
    (0.00000109, 2.966, 1577.344),
    (0.00000093, 2.59, 18849.23),
    (0.00000072, 1.14, 529.69),
    (0.00000068, 1.87, 398.15),
    (0.00000067, 4.41, 5507.55),
    (0.00000059, 2.89, 5223.69),
    (0.00000056, 2.17, 155.42),
    (0.00000045, 0.4, 796.3),
    (0.00000036, 0.47, 775.52),
    (0.00000029, 2.65, 7.11),
    (0.00000021, 5.34, 0.98),
    (0.00000019, 1.85, 5486.78),
    (0.00000019, 4.97, 213.3),
    (0.00000017, 2.99, 6275.96),
    (0.00000016, 0.03, 2544.31),
    (0.00000016, 1.43, 2146.17),
    (0.00000015, 1.21, 10977.08),
    (0.00000012, 2.83, 1748.02),
    (0.00000012, 3.26, 5088.63),
    (0.00000012, 5.27, 1194.45),
    (0.00000012, 2.08, 4694.0),
    (0.00000011, 0.77, 553.57),
    (0.0000001, 1.3, 6286.6),
    (0.0000001, 4.24, 1349.87),
    (0.00000009, 2.7, 242.73),
    (0.00000009, 5.64, 951.72),
    (0.00000008, 5.3, 2352.87),
    (0.00000006, 2.65, 9437.76),
    (0.00000006, 4.67, 4690.48),
];

#[rustfmt::skip]
const EARTH_L2: &[Term] = &[
    (0.00052919, 0.0, 0.0),
    (0.0000872, 1.0721, 6283.0758),
    (0.00000309, 0.867, 12566.152),
    (0.00000027, 0.05, 3.52),
    (0.00000016, 5.19, 26.3),
    (0.00000016, 3.68, 155.42),
    (0.0000001, 0.76, 18849.23),
    (0.00000009, 2.06, 77713.77),
    (0.00000007, 0.83, 775.52),
    (0.00000005, 4.66, 1577.34),
    (0.00000004, 1.03, 7.11),
    (0.00000004, 3.44, 5573.14),
    (0.00000003, 5.14, 796.3),
    (0.00000003, 6.05, 5507.55),
    (0.00000003, 1.19, 242.73),
    (0.00000003, 6.12, 529.69),
    (0.00000003, 0.31, 398.15),
    (0.00000003, 2.28, 553.57),
    (0.00000002, 4.38, 5223.69),
    (0.00000002, 3.75, 0.98),
];

#[rustfmt::skip]
const EARTH_L3: &[Term] = &[
    (0.00000289, 5.844, 6283.076),
    (0.00000035, 0.0, 0.0),
    (0.00000017, 5.49, 12566.15),
    (0.00000003, 5.2, 155.42),
    (0.00000001, 4.72, 3.52),
    (0.00000001, 5.3, 18849.23),
    (0.00000001, 5.97, 242.73),
];

#[rustfmt::skip]
const EARTH_L4: &[Term] = &[
    (0.00000114, 3.142, 0.0),
    (0.00000008, 4.13, 6283.08),
    (0.00000001, 3.84, 12566.15),
];

#[rustfmt::skip]
const EARTH_L5: &[Term] = &[
    (0.00000001, 3.14, 0.0),
];

#[rustfmt::skip]
const EARTH_B0: &[Term] = &[
    (0.0000028, 3.199, 84334.662),
    (0.00000102, 5.422, 5507.553),
    (0.0000008, 3.88, 5223.69),
    (0.00000044, 3.7, 2352.87),
    (0.00000032, 4.0, 1577.34),
];

#[rustfmt::skip]
const EARTH_B1: &[Term] = &[
    (0.00000009, 3.9, 5507.55),
    (0.00000006, 1.73, 5223.69),
];

#[rustfmt::skip]
const EARTH_R0: &[Term] = &[
    (1.00013989, 0.0, 0.0),
    (0.016707, 3.0984635, 6283.07585),
    (0.00013956, 3.05525, 12566.1517),
    (0.00003084, 5.1985, 77713.7715),
    (0.00001628, 1.1739, 5753.3849),
    (0.00001576, 2.8469, 7860.4194),
    (0.00000925, 5.453, 11506.77),
    (0.00000542, 4.564, 3930.21),
    (0.00000472, 3.661, 5884.927),
    (0.00000346, 0.964, 5507.553),
    (0.00000329, 5.9, 5223.694),
    (0.00000307, 0.299, 5573.143),
    (0.00000243, 4.273, 11790.629),
    (0.00000212, 5.847, 1577.344),
    (0.00000186, 5.022, 10977.079),
    (0.00000175, 3.012, 18849.228),
    (0.0000011, 5.055, 5486.778),
    (0.00000098, 0.89, 6069.78),
    (0.00000086, 5.69, 15720.84),
    (0.00000086, 1.27, 161000.69),
    (0.00000065, 0.27, 17260.15),
    (0.00000063, 0.92, 529.69),
    (0.00000057, 2.01, 83996.85),
    (0.00000056, 5.24, 71430.7),
    (0.00000049, 3.25, 2544.31),
    (0.00000047, 2.58, 775.52),
    (0.00000045, 5.54, 9437.76),
    (0.00000043, 6.01, 6275.96),
    (0.00000039, 5.36, 4694.0),
    (0.00000038, 2.39, 8827.39),
    (0.00000037, 0.83, 19651.05),
    (0.00000037, 4.9, 12139.55),
    (0.00000036, 1.67, 12036.46),
    (0.00000035, 1.84, 2942.46),
    (0.00000033, 0.24, 7084.9),
    (0.00000032, 0.18, 5088.63),
    (0.00000032, 1.78, 398.15),
    (0.00000028, 1.21, 6286.6),
    (0.00000028, 1.9, 6279.55),
    (0.00000026, 4.59, 10447.39),
];

#[rustfmt::skip]
const EARTH_R1: &[Term] = &[
    (0.00103019, 1.10749, 6283.07585),
    (0.00001721, 1.0644, 12566.1517),
    (0.00000702, 3.142, 0.0),
    (0.00000032, 1.02, 18849.23),
    (0.00000031, 2.84, 5507.55),
    (0.00000025, 1.32, 5223.69),
    (0.00000018, 1.42, 1577.34),
    (0.0000001, 5.91, 10977.08),
    (0.00000009, 1.42, 6275.96),
    (0.00000009, 0.27, 5486.78),
];

#[rustfmt::skip]
const EARTH_R2: &[Term] = &[
    (0.00004359, 5.7846, 6283.0758),
    (0.00000124, 5.579, 12566.152),
    (0.00000012, 3.14, 0.0),
    (0.00000009, 3.63, 77713.77),
    (0.00000006, 1.87, 5573.14),
    (0.00000003, 5.47, 18849.23),
];

#[rustfmt::skip]
const EARTH_R3: &[Term] = &[
    (0.00000145, 4.273, 6283.076),
    (0.00000007, 3.92, 12566.15),
];

#[rustfmt::skip]
const EARTH_R4: &[Term] = &[
    (0.00000004, 2.56, 6283.08),
];

pub(super) static EARTH: VsopModel = VsopModel {
    lon: &[EARTH_L0, EARTH_L1, EARTH_L2, EARTH_L3, EARTH_L4, EARTH_L5],
    lat: &[EARTH_B0, EARTH_B1],
    rad: &[EARTH_R0, EARTH_R1, EARTH_R2, EARTH_R3, EARTH_R4],
};

#[rustfmt::skip]
const MARS_L0: &[Term] = &[
    (6.20347712, 0.0, 0.0),
    (0.18656368, 5.050371, 3340.6124267),
    (0.01108217, 5.4009984, 6681.2248534),
    (0.00091798, 5.75479, 10021.83728),
    (0.00027745, 5.9705, 3.52312),
    (0.00012316, 0.84956, 2810.92146),
    (0.0001061, 2.93959, 2281.2305),
    (0.00008927, 4.157, 0.0173),
    (0.00008716, 6.1101, 13362.4497),
    (0.00007775, 3.3397, 5621.8429),
    (0.00006798, 0.3646, 398.149),
    (0.00004161, 0.2281, 2942.4634),
    (0.00003575, 1.6619, 2544.3144),
    (0.00003075, 0.857, 191.4483),
    (0.00002938, 6.0789, 0.0673),
    (0.00002628, 0.6481, 3337.0893),
    (0.0000258, 0.03, 3344.1355),
    (0.00002389, 5.039, 796.298),
    (0.00001799, 0.6563, 529.691),
    (0.00001546, 2.9158, 1751.5395),
    (0.00001528, 1.1498, 6151.5339),
    (0.00001286, 3.068, 2146.1654),
    (0.00001264, 3.6228, 5092.152),
    (0.00001025, 3.6933, 8962.4553),
    (0.00000892, 0.183, 16703.062),
    (0.00000859, 2.401, 2914.014),
    (0.00000833, 4.495, 3340.63),
    (0.00000833, 2.464, 3340.595),
    (0.00000749, 3.822, 155.42),
    (0.00000724, 0.675, 3738.761),
    (0.00000713, 3.663, 1059.382),
    (0.00000655, 0.489, 3127.313),
    (0.00000636, 2.922, 8432.764),
    (0.00000553, 4.475, 1748.016),
    (0.0000055, 3.81, 0.98),
    (0.00000472, 3.625, 1194.447),
    (0.00000426, 0.554, 6283.076),
    (0.00000415, 0.497, 213.299),
    (0.00000312, 0.999, 6677.702),
    (0.00000307, 0.381, 6684.748),
    (0.00000302, 4.486, 3532.061),
    (0.00000299, 2.783, 6254.627),
    (0.00000293, 4.221, 20.775),
    (0.00000284, 5.769, 3149.164),
    (0.00000281, 5.882, 1349.867),
    (0.00000274, 0.542, 3340.545),
    (0.00000274, 0.134, 3340.68),
    (0.00000239, 5.372, 4136.91),
    (0.00000236, 5.755, 3333.499),
    (0.00000231, 1.282, 3870.303),
    (0.00000221, 3.505, 382.897),
    (0.00000204, 2.821, 1221.849),
    (0.00000193, 3.357, 3.59),
    (0.00000189, 1.491, 9492.146),
    (0.00000179, 1.006, 951.718),
    (0.00000174, 2.414, 553.569),
    (0.00000172, 0.439, 5486.778),
    (0.0000016, 3.949, 4562.461),
    (0.00000144, 1.419, 135.065),
    (0.0000014, 3.326, 2700.715),
    (0.00000138, 4.301, 7.114),
    (0.00000131, 4.045, 12303.068),
    (0.00000128, 2.208, 1592.596),
    (0.00000128, 1.807, 5088.629),
    (0.00000117, 3.128, 7903.073),
    (0.00000113, 3.701, 1589.073),
    (0.0000011, 1.052, 242.729),
    (0.00000105, 0.785, 8827.39),
    (0.000001, 3.243, 11773.377),
];

#[rustfmt::skip]
const MARS_L1: &[Term] = &[
    (3340.85627474, 0.0, 0.0),
    (0.01458227, 3.6042605, 3340.6124267),
    (0.00164901, 3.926313, 6681.224853),
    (0.00019963, 4.26594, 10021.83728),
    (0.00003452, 4.7321, 3.5231),
    (0.00002485, 4.6128, 13362.4497),
    (0.00000842, 4.459, 2281.23),
    (0.00000538, 5.016, 398.149),
    (0.00000521, 4.994, 3344.136),
    (0.00000433, 2.561, 191.448),
    (0.0000043, 5.316, 155.42),
    (0.00000382, 3.539, 796.298),
    (0.00000314, 4.963, 16703.062),
    (0.00000283, 3.16, 2544.314),
    (0.00000206, 4.569, 2146.165),
    (0.00000169, 1.329, 3337.089),
    (0.00000158, 4.185, 1751.54),
    (0.00000134, 2.233, 0.98),
    (0.00000134, 5.974, 1748.016),
    (0.00000118, 6.024, 6151.534),
    (0.00000117, 2.213, 1059.382),
    (0.00000114, 2.129, 1194.447),
    (0.00000114, 5.428, 3738.761),
    (0.00000091, 1.1, 1349.87),
    (0.00000085, 3.91, 553.57),
    (0.00000083, 5.3, 6684.75),
    (0.00000081, 4.43, 529.69),
    (0.0000008, 2.25, 8962.46),
    (0.00000072, 5.34, 2942.46),
    (0.00000069, 2.3, 3532.06),
];

#[rustfmt::skip]
const MARS_L2: &[Term] = &[
    (0.00058016, 2.04979, 3340.61243),
    (0.00054188, 0.0, 0.0),
    (0.00013908, 2.45742, 6681.22485),
    (0.00002465, 2.8, 10021.8373),
    (0.00000398, 3.141, 13362.45),
    (0.00000222, 3.194, 3.523),
    (0.00000121, 0.543, 155.42),
    (0.00000062, 3.49, 16703.06),
    (0.00000054, 3.54, 3344.14),
    (0.00000034, 6.0, 2281.23),
    (0.00000032, 4.14, 191.45),
    (0.0000003, 2.0, 796.3),
    (0.00000023, 4.33, 242.73),
    (0.00000022, 3.45, 398.15),
    (0.0000002, 5.42, 553.57),
    (0.00000016, 0.66, 0.98),
    (0.00000016, 6.11, 2146.17),
    (0.00000016, 1.22, 1748.02),
    (0.00000015, 6.1, 3185.19),
    (0.00000014, 4.02, 951.72),
    (0.00000014, 2.62, 1349.87),
    (0.00000013, 0.6, 1194.45),
    (0.00000012, 3.86, 6684.75),
    (0.00000011, 4.72, 2544.31),
    (0.0000001, 0.25, 382.9),
    (0.00000009, 0.68, 1059.38),
    (0.00000009, 3.83, 20043.67),
    (0.00000009, 3.88, 3738.76),
    (0.00000008, 5.46, 1751.54),
    (0.00000007, 2.58, 3149.16),
    (0.00000007, 2.38, 4136.91),
    (0.00000006, 5.48, 1592.6),
    (0.00000006, 2.34, 3097.88),
];

#[rustfmt::skip]
const MARS_L3: &[Term] = &[
    (0.00001482, 0.4443, 3340.6124),
    (0.00000662, 0.885, 6681.225),
    (0.00000188, 1.288, 10021.837),
    (0.00000041, 1.65, 13362.45),
    (0.00000026, 0.0, 0.0),
    (0.00000023, 2.05, 155.42),
    (0.0000001, 1.58, 3.52),
    (0.00000008, 2.0, 16703.06),
    (0.00000005, 2.82, 242.73),
    (0.00000004, 2.02, 3344.14),
    (0.00000003, 4.59, 3185.19),
    (0.00000003, 0.65, 553.57),
];

#[rustfmt::skip]
const MARS_L4: &[Term] = &[
    (0.00000114, 3.1416, 0.0),
    (0.00000029, 5.64, 6681.22),
    (0.00000024, 5.14, 3340.61),
    (0.00000011, 6.03, 10021.84),
    (0.00000003, 0.13, 13362.45),
    (0.00000003, 3.56, 155.42),
    (0.00000001, 0.49, 16703.06),
    (0.00000001, 1.32, 242.73),
];

#[rustfmt::skip]
const MARS_L5: &[Term] = &[
    (0.00000001, 3.14, 0.0),
    (0.00000001, 4.04, 6681.22),
];

#[rustfmt::skip]
const MARS_B0: &[Term] = &[
    (0.03197135, 3.7683204, 3340.6124267),
    (0.00298033, 4.10617, 6681.224853),
    (0.00289105, 0.0, 0.0),
    (0.00031366, 4.44651, 10021.83728),
    (0.00003484, 4.7881, 13362.4497),
    (0.00000443, 5.026, 3344.136),
    (0.00000443, 5.652, 3337.089),
    (0.00000399, 5.131, 16703.062),
    (0.00000293, 3.793, 2281.23),
    (0.00000182, 6.136, 6151.534),
    (0.00000163, 4.264, 529.691),
    (0.0000016, 2.232, 1059.382),
    (0.00000149, 2.165, 5621.843),
    (0.00000143, 1.182, 3340.595),
    (0.00000143, 3.213, 3340.63),
    (0.00000139, 2.418, 8962.455),
];

#[rustfmt::skip]
const MARS_B1: &[Term] = &[
    (0.00350069, 5.368478, 3340.612427),
    (0.00014116, 3.14159, 0.0),
    (0.00009671, 5.4788, 6681.2249),
    (0.00001472, 3.2021, 10021.8373),
    (0.00000426, 3.408, 13362.45),
    (0.00000102, 0.776, 3337.089),
    (0.00000079, 3.72, 16703.06),
    (0.00000033, 3.46, 5621.84),
    (0.00000026, 2.48, 2281.23),
];

#[rustfmt::skip]
const MARS_B2: &[Term] = &[
    (0.00016727, 0.60221, 3340.61243),
    (0.00004987, 3.1416, 0.0),
    (0.00000302, 5.559, 6681.225),
    (0.00000026, 1.9, 13362.45),
    (0.00000021, 0.92, 10021.84),
    (0.00000012, 2.24, 3337.09),
    (0.00000008, 2.25, 16703.06),
];

#[rustfmt::skip]
const MARS_B3: &[Term] = &[
    (0.00000607, 1.981, 3340.612),
    (0.00000043, 0.0, 0.0),
    (0.00000014, 1.8, 6681.22),
    (0.00000003, 3.45, 10021.84),
];

#[rustfmt::skip]
const MARS_B4: &[Term] = &[
    (0.00000013, 0.0, 0.0),
    (0.00000011, 3.46, 3340.61),
    (0.00000001, 0.5, 6681.22),
];

#[rustfmt::skip]
const MARS_R0: &[Term] = &[
    (1.53033488, 0.0, 0.0),
    (0.14184953, 3.47971284, 3340.6124267),
    (0.00660776, 3.817834, 6681.224853),
    (0.00046179, 4.15595, 10021.83728),
    (0.0000811, 5.5596, 2810.9215),
    (0.00007485, 1.7724, 5621.8429),
    (0.00005523, 1.3644, 2281.2305),
    (0.00003825, 4.4941, 13362.4497),
    (0.00002484, 4.9255, 2942.4634),
    (0.00002307, 0.0908, 2544.3144),
    (0.00001999, 5.3606, 3337.0893),
    (0.0000196, 4.7425, 3344.1355),
    (0.00001167, 2.1126, 5092.152),
    (0.00001103, 5.0091, 398.149),
    (0.00000992, 5.839, 6151.534),
    (0.00000899, 4.408, 529.691),
    (0.00000807, 2.102, 1059.382),
    (0.00000798, 3.448, 796.298),
    (0.00000741, 1.499, 2146.165),
    (0.00000726, 1.245, 8432.764),
    (0.00000692, 2.134, 8962.455),
    (0.00000633, 0.894, 3340.595),
    (0.00000633, 2.924, 3340.63),
    (0.0000063, 1.287, 1751.54),
    (0.00000574, 0.829, 2914.014),
    (0.00000526, 5.383, 3738.761),
    (0.00000473, 5.199, 3127.313),
    (0.00000348, 4.832, 16703.062),
    (0.00000284, 2.907, 3532.061),
    (0.0000028, 5.257, 6283.076),
    (0.00000276, 1.218, 6254.627),
    (0.00000275, 2.908, 1748.016),
    (0.0000027, 3.764, 5884.927),
    (0.00000239, 2.037, 1194.447),
    (0.00000234, 5.105, 5486.778),
    (0.00000228, 3.255, 6872.673),
    (0.00000223, 4.199, 3149.164),
    (0.00000219, 5.583, 191.448),
    (0.00000208, 5.255, 3340.545),
    (0.00000208, 4.846, 3340.68),
    (0.00000186, 5.699, 6677.702),
    (0.00000183, 5.081, 6684.748),
    (0.00000179, 4.184, 3333.499),
    (0.00000176, 5.953, 3870.303),
    (0.00000164, 3.799, 4136.91),
];

#[rustfmt::skip]
const MARS_R1: &[Term] = &[
    (0.01107433, 2.0325052, 3340.6124267),
    (0.00103176, 2.370718, 6681.224853),
    (0.00012877, 0.0, 0.0),
    (0.00010816, 2.70888, 10021.83728),
    (0.00001195, 3.047, 13362.4497),
    (0.00000439, 2.888, 2281.23),
    (0.00000396, 3.423, 3344.136),
    (0.00000183, 1.584, 2544.314),
    (0.00000136, 3.385, 16703.062),
    (0.00000128, 6.043, 3337.089),
    (0.00000128, 0.63, 1059.382),
    (0.00000127, 1.954, 796.298),
    (0.00000118, 2.998, 2146.165),
    (0.00000088, 3.42, 398.15),
    (0.00000083, 3.86, 3738.76),
    (0.00000076, 4.45, 6151.53),
    (0.00000072, 2.76, 529.69),
    (0.00000067, 2.55, 1751.54),
    (0.00000066, 4.41, 1748.02),
    (0.00000058, 0.54, 1194.45),
    (0.00000054, 0.68, 8962.46),
    (0.00000051, 3.73, 6684.75),
    (0.00000049, 5.73, 3340.6),
    (0.00000049, 1.48, 3340.63),
    (0.00000048, 2.58, 3149.16),
    (0.00000048, 2.29, 2914.01),
    (0.00000039, 2.32, 4136.91),
];

#[rustfmt::skip]
const MARS_R2: &[Term] = &[
    (0.00044242, 0.47931, 3340.61243),
    (0.00008138, 0.87, 6681.2249),
    (0.00001275, 1.2259, 10021.8373),
    (0.00000187, 1.573, 13362.45),
    (0.00000052, 3.14, 0.0),
    (0.00000041, 1.97, 3344.14),
    (0.00000027, 1.87, 16703.06),
    (0.00000024, 2.03, 3337.09),
    (0.00000019, 3.27, 3185.19),
    (0.00000017, 3.2, 3738.76),
];

#[rustfmt::skip]
const MARS_R3: &[Term] = &[
    (0.00001113, 5.1499, 3340.6124),
    (0.00000424, 5.613, 6681.225),
    (0.000001, 5.997, 10021.837),
    (0.0000002, 0.08, 13362.45),
    (0.00000005, 3.14, 0.0),
    (0.00000003, 0.43, 16703.06),
];

#[rustfmt::skip]
const MARS_R4: &[Term] = &[
    (0.0000002, 3.58, 3340.61),
    (0.00000016, 4.05, 6681.22),
    (0.00000006, 4.46, 10021.84),
    (0.00000002, 4.84, 13362.45),
];

pub(super) static MARS: VsopModel = VsopModel {
    lon: &[MARS_L0, MARS_L1, MARS_L2, MARS_L3, MARS_L4, MARS_L5],
    lat: &[MARS_B0, MARS_B1, MARS_B2, MARS_B3, MARS_B4],
    rad: &[MARS_R0, MARS_R1, MARS_R2, MARS_R3, MARS_R4],
};

#[rustfmt::skip]
const JUPITER_L0: &[Term] = &[
    (0.59954691, 0.0, 0.0),
    (0.09695899, 5.0619179, 529.6909651),
    (0.0057361, 1.444062, 7.113547),
    (0.00306389, 5.417347, 1059.38193),
    (0.00097178, 4.14265, 632.78374),
    (0.00072903, 3.64043, 522.57742),
    (0.00064264, 3.41145, 103.09277),
    (0.00039806, 2.29377, 419.48464),
    (0.00038858, 1.27232, 316.39187),
    (0.00027965, 1.78455, 536.80451),
    (0.0001359, 5.77481, 1589.0729),
    (0.00008769, 3.63, 949.1756),
    (0.00008246, 3.5823, 206.1855),
    (0.00007368, 5.081, 735.8765),
    (0.00006263, 0.025, 213.2991),
    (0.00006114, 4.5132, 1162.4747),
    (0.00005305, 4.1863, 1052.2684),
    (0.00005305, 1.3067, 14.2271),
    (0.00004905, 1.3208, 110.2063),
    (0.00004647, 4.6996, 3.9322),
    (0.00003045, 4.3168, 426.5982),
    (0.0000261, 1.5667, 846.0828),
    (0.00002028, 1.0638, 3.1814),
    (0.00001921, 0.9717, 639.8973),
    (0.00001765, 2.1415, 1066.4955),
    (0.00001723, 3.8804, 1265.5675),
    (0.00001633, 3.582, 515.4639),
    (0.00001432, 4.2968, 625.6702),
    (0.00000973, 4.098, 95.979),
    (0.00000884, 2.437, 412.371),
    (0.00000733, 6.085, 838.969),
    (0.00000731, 3.806, 1581.959),
    (0.00000709, 1.293, 742.99),
    (0.00000692, 6.134, 2118.764),
    (0.00000614, 4.109, 1478.867),
    (0.00000582, 4.54, 309.278),
    (0.00000495, 3.756, 323.505),
    (0.00000441, 2.958, 454.909),
    (0.00000417, 1.036, 2.448),
    (0.0000039, 4.897, 1692.166),
    (0.00000376, 4.703, 1368.66),
    (0.00000341, 5.715, 533.623),
    (0.0000033, 4.74, 0.048),
    (0.00000262, 1.877, 0.963),
    (0.00000261, 0.82, 380.128),
    (0.00000257, 3.724, 199.072),
    (0.00000244, 5.22, 728.763),
    (0.00000235, 1.227, 909.819),
    (0.0000022, 1.651, 543.918),
    (0.00000207, 1.855, 525.759),
    (0.00000202, 1.807, 1375.774),
    (0.00000197, 5.293, 1155.361),
    (0.00000175, 3.73, 942.062),
    (0.00000175, 3.226, 1898.351),
    (0.00000175, 5.91, 956.289),
    (0.00000158, 4.365, 860.31),
];

#[rustfmt::skip]
const JUPITER_L1: &[Term] = &[
    (529.93480757, 0.0, 0.0),
    (0.00489741, 4.220667, 529.690965),
    (0.00228919, 6.026475, 7.113547),
    (0.00027655, 4.57266, 1059.38193),
    (0.00020721, 5.45939, 522.57742),
    (0.00012106, 0.16986, 536.80451),
    (0.00006068, 4.4242, 103.0928),
    (0.00005434, 3.9848, 419.4846),
    (0.00004238, 5.8901, 14.2271),
    (0.00002212, 5.2677, 206.1855),
    (0.00001746, 4.9267, 1589.0729),
    (0.00001296, 5.5513, 3.1814),
    (0.00001173, 5.8565, 1052.2684),
    (0.00001163, 0.5145, 3.9322),
    (0.00001099, 5.307, 515.4639),
    (0.00001007, 0.4648, 735.8765),
    (0.00001004, 3.1504, 426.5982),
    (0.00000848, 5.758, 110.206),
    (0.00000827, 4.803, 213.299),
    (0.00000816, 0.586, 1066.496),
    (0.00000725, 5.518, 639.897),
    (0.00000568, 5.989, 625.67),
    (0.00000474, 4.132, 412.371),
    (0.0000047, 5.722, 95.979),
    (0.00000416, 3.129, 1162.475),
];

#[rustfmt::skip]
const JUPITER_L2: &[Term] = &[
    (0.00047234, 4.32148, 7.11355),
    (0.00038966, 0.0, 0.0),
    (0.00030629, 2.93021, 529.69097),
    (0.00003189, 1.055, 522.5774),
    (0.00002729, 4.8455, 536.8045),
    (0.00002723, 3.4141, 1059.3819),
    (0.00001721, 4.1873, 14.2271),
    (0.00000383, 5.768, 419.485),
    (0.00000378, 0.76, 515.464),
    (0.00000367, 6.055, 103.093),
    (0.00000337, 3.786, 3.181),
    (0.00000308, 0.694, 206.186),
    (0.00000218, 3.814, 1589.073),
    (0.00000199, 5.34, 1066.495),
    (0.00000197, 2.484, 3.932),
    (0.00000156, 1.406, 1052.268),
    (0.00000146, 3.814, 639.897),
    (0.00000142, 1.634, 426.598),
    (0.0000013, 5.837, 412.371),
    (0.00000117, 1.414, 625.67),
    (0.00000097, 4.03, 110.21),
    (0.00000091, 1.11, 95.98),
    (0.00000087, 2.52, 632.78),
    (0.00000079, 4.64, 543.92),
    (0.00000072, 2.22, 735.88),
    (0.00000058, 0.83, 199.07),
    (0.00000057, 3.12, 213.3),
    (0.00000049, 1.67, 309.28),
    (0.0000004, 4.02, 21.34),
    (0.0000004, 0.62, 323.51),
    (0.00000036, 2.33, 728.76),
    (0.00000029, 3.61, 10213.29),
    (0.00000028, 3.24, 838.97),
    (0.00000026, 4.5, 742.99),
    (0.00000026, 2.51, 1162.47),
    (0.00000025, 1.22, 1045.15),
    (0.00000024, 3.01, 956.29),
    (0.00000019, 4.29, 532.87),
    (0.00000018, 0.81, 508.35),
    (0.00000017, 4.2, 2118.76),
    (0.00000017, 1.83, 526.51),
    (0.00000015, 5.81, 1596.19),
    (0.00000015, 0.68, 942.06),
    (0.00000015, 4.0, 117.32),
    (0.00000014, 5.95, 316.39),
    (0.00000014, 1.8, 302.16),
    (0.00000013, 2.52, 88.87),
    (0.00000013, 4.37, 1169.59),
    (0.00000011, 4.44, 525.76),
    (0.0000001, 1.72, 1581.96),
    (0.00000009, 2.18, 1155.36),
    (0.00000009, 3.29, 220.41),
    (0.00000009, 3.32, 831.86),
    (0.00000008, 5.76, 846.08),
    (0.00000008, 2.71, 533.62),
    (0.00000007, 2.18, 1265.57),
    (0.00000006, 0.5, 949.18),
];

#[rustfmt::skip]
const JUPITER_L3: &[Term] = &[
    (0.00006502, 2.5986, 7.1135),
    (0.00001357, 1.3464, 529.691),
    (0.00000471, 2.475, 14.227),
    (0.00000417, 3.245, 536.805),
    (0.00000353, 2.974, 522.577),
    (0.00000155, 2.076, 1059.382),
    (0.00000087, 2.51, 515.46),
    (0.00000044, 0.0, 0.0),
    (0.00000034, 3.83, 1066.5),
    (0.00000028, 2.45, 206.19),
    (0.00000024, 1.28, 412.37),
    (0.00000023, 2.98, 543.92),
    (0.0000002, 2.1, 639.9),
    (0.0000002, 1.4, 419.48),
    (0.00000019, 1.59, 103.09),
    (0.00000017, 2.3, 21.34),
    (0.00000017, 2.6, 1589.07),
    (0.00000016, 3.15, 625.67),
    (0.00000016, 3.36, 1052.27),
    (0.00000013, 2.76, 95.98),
    (0.00000013, 2.54, 199.07),
    (0.00000013, 6.27, 426.6),
    (0.00000009, 1.76, 10213.29),
    (0.00000009, 2.27, 110.21),
    (0.00000007, 3.43, 309.28),
    (0.00000007, 4.04, 728.76),
    (0.00000006, 2.52, 508.35),
    (0.00000005, 2.91, 1045.15),
    (0.00000005, 5.25, 323.51),
    (0.00000004, 4.3, 88.87),
    (0.00000004, 3.52, 302.16),
    (0.00000004, 4.09, 735.88),
    (0.00000003, 1.43, 956.29),
    (0.00000003, 4.36, 1596.19),
    (0.00000003, 1.25, 213.3),
    (0.00000003, 5.02, 838.97),
    (0.00000003, 2.24, 117.32),
    (0.00000002, 2.9, 742.99),
    (0.00000002, 2.36, 942.06),
];

#[rustfmt::skip]
const JUPITER_L4: &[Term] = &[
    (0.00000669, 0.853, 7.114),
    (0.00000114, 3.142, 0.0),
    (0.000001, 0.743, 14.227),
    (0.0000005, 1.65, 536.8),
    (0.00000044, 5.82, 529.69),
    (0.00000032, 4.86, 522.58),
    (0.00000015, 4.29, 515.46),
    (0.00000009, 0.71, 1059.38),
    (0.00000005, 1.3, 543.92),
    (0.00000004, 2.32, 1066.5),
    (0.00000004, 0.48, 21.34),
    (0.00000003, 3.0, 412.37),
    (0.00000002, 0.4, 639.9),
    (0.00000002, 4.26, 199.07),
    (0.00000002, 4.91, 625.67),
    (0.00000002, 4.26, 206.19),
    (0.00000001, 5.26, 1052.27),
    (0.00000001, 4.72, 95.98),
    (0.00000001, 1.29, 1589.07),
];

#[rustfmt::skip]
const JUPITER_L5: &[Term] = &[
    (0.0000005, 5.26, 7.11),
    (0.00000016, 5.25, 14.23),
    (0.00000004, 0.01, 536.8),
    (0.00000002, 1.1, 522.58),
    (0.00000001, 3.14, 0.0),
];

#[rustfmt::skip]
const JUPITER_B0: &[Term] = &[
    (0.02268616, 3.5585261, 529.6909651),
    (0.0011009, 0.0, 0.0),
    (0.00109972, 3.908093, 1059.38193),
    (0.00008101, 3.6051, 522.5774),
    (0.00006438, 0.3063, 536.8045),
    (0.00006044, 4.2588, 1589.0729),
    (0.00001107, 2.9853, 1162.4747),
    (0.00000944, 1.675, 426.598),
    (0.00000942, 2.936, 1052.268),
    (0.00000894, 1.754, 7.114),
    (0.00000836, 5.179, 103.093),
    (0.00000767, 2.155, 632.784),
    (0.00000684, 3.678, 213.299),
    (0.00000629, 0.643, 1066.495),
    (0.00000559, 0.014, 846.083),
    (0.00000532, 2.703, 110.206),
    (0.00000464, 1.173, 949.176),
    (0.00000431, 2.608, 419.485),
    (0.00000351, 4.611, 2118.764),
    (0.00000132, 4.778, 742.99),
    (0.00000123, 3.35, 1692.166),
    (0.00000116, 1.387, 323.505),
    (0.00000115, 5.049, 316.392),
    (0.00000104, 3.701, 515.464),
    (0.00000103, 2.319, 1478.867),
    (0.00000102, 3.153, 1581.959),
];

#[rustfmt::skip]
const JUPITER_B1: &[Term] = &[
    (0.00177352, 5.701665, 529.690965),
    (0.0000323, 5.7794, 1059.3819),
    (0.00003081, 5.4746, 522.5774),
    (0.00002212, 4.7348, 536.8045),
    (0.00001694, 3.1416, 0.0),
    (0.00000346, 4.746, 1052.268),
    (0.00000234, 5.189, 1066.495),
    (0.00000196, 6.186, 7.114),
    (0.0000015, 3.927, 1589.073),
    (0.00000114, 3.439, 632.784),
    (0.00000097, 2.91, 949.18),
    (0.00000082, 5.08, 1162.47),
    (0.00000077, 2.51, 103.09),
    (0.00000077, 0.61, 419.48),
    (0.00000074, 5.5, 515.46),
    (0.00000061, 5.45, 213.3),
    (0.0000005, 3.95, 735.88),
    (0.00000046, 0.54, 110.21),
    (0.00000045, 1.9, 846.08),
    (0.00000037, 4.7, 543.92),
    (0.00000036, 6.11, 316.39),
    (0.00000032, 4.92, 1581.96),
];

#[rustfmt::skip]
const JUPITER_B2: &[Term] = &[
    (0.00008094, 1.4632, 529.691),
    (0.00000813, 3.1416, 0.0),
    (0.00000742, 0.957, 522.577),
    (0.00000399, 2.899, 536.805),
    (0.00000342, 1.447, 1059.382),
    (0.00000074, 0.41, 1052.27),
    (0.00000046, 3.48, 1066.5),
    (0.0000003, 1.93, 1589.07),
    (0.00000029, 0.99, 515.46),
    (0.00000023, 4.27, 7.11),
    (0.00000014, 2.92, 543.92),
    (0.00000012, 5.22, 632.78),
    (0.00000011, 4.88, 949.18),
    (0.00000006, 6.21, 1045.15),
];

#[rustfmt::skip]
const JUPITER_B3: &[Term] = &[
    (0.00000252, 3.381, 529.691),
    (0.00000122, 2.733, 522.577),
    (0.00000049, 1.04, 536.81),
    (0.00000011, 2.31, 1059.38),
    (0.00000008, 2.77, 515.46),
    (0.00000007, 4.25, 543.92),
    (0.00000006, 1.78, 1066.5),
    (0.00000004, 1.13, 1052.27),
];

#[rustfmt::skip]
const JUPITER_B4: &[Term] = &[
    (0.00000015, 4.53, 522.58),
    (0.00000005, 4.47, 529.69),
    (0.00000004, 5.44, 536.81),
    (0.00000003, 0.0, 0.0),
    (0.00000002, 4.52, 515.46),
    (0.00000001, 4.2, 1052.27),
];

#[rustfmt::skip]
const JUPITER_B5: &[Term] = &[
    (0.00000001, 0.09, 522.58),
];

#[rustfmt::skip]
const JUPITER_R0: &[Term] = &[
    (5.20887429, 0.0, 0.0),
    (0.25209327, 3.4910864, 529.69096509),
    (0.006106, 3.841154, 1059.38193),
    (0.00282029, 2.574199, 632.783739),
    (0.00187647, 2.075904, 522.577418),
    (0.00086793, 0.71001, 419.48464),
    (0.00072063, 0.21466, 536.80451),
    (0.00065517, 5.97996, 316.39187),
    (0.00030135, 2.16132, 949.17561),
    (0.00029135, 1.67759, 103.09277),
    (0.00023947, 0.27458, 7.11355),
    (0.00023453, 3.54023, 735.87651),
    (0.00022284, 4.19363, 1589.0729),
    (0.00013033, 2.96043, 1162.4747),
    (0.00012749, 2.7155, 1052.26838),
    (0.00009703, 1.9067, 206.1855),
    (0.00009161, 4.4135, 213.2991),
    (0.00007895, 2.4791, 426.5982),
    (0.00007058, 2.1818, 1265.5675),
    (0.00006138, 6.2642, 846.0828),
    (0.00005477, 5.6573, 639.8973),
    (0.0000417, 2.0161, 515.4639),
    (0.00004137, 2.7222, 625.6702),
    (0.00003503, 0.5653, 1066.4955),
    (0.00002617, 2.0099, 1581.9593),
    (0.000025, 4.5518, 838.9693),
    (0.00002128, 6.1275, 742.9901),
    (0.00001912, 0.8562, 412.3711),
    (0.00001611, 3.0887, 1368.6603),
    (0.00001479, 2.6803, 1478.8666),
    (0.00001231, 1.8904, 323.5054),
    (0.00001217, 1.8017, 110.2063),
    (0.00001015, 1.3867, 454.9094),
    (0.00000999, 2.872, 309.278),
    (0.00000961, 4.549, 2118.764),
    (0.00000886, 4.148, 533.623),
    (0.00000821, 1.593, 1898.351),
    (0.00000812, 5.941, 909.819),
    (0.00000777, 3.677, 728.763),
    (0.00000727, 3.988, 1155.361),
    (0.00000655, 2.791, 1685.052),
    (0.00000654, 3.382, 1692.166),
    (0.00000621, 4.823, 956.289),
    (0.00000615, 2.276, 942.062),
    (0.00000562, 0.081, 543.918),
    (0.00000542, 0.284, 525.759),
];

#[rustfmt::skip]
const JUPITER_R1: &[Term] = &[
    (0.01271802, 2.6493751, 529.6909651),
    (0.00061662, 3.00076, 1059.38193),
    (0.00053444, 3.89718, 522.57742),
    (0.0004139, 0.0, 0.0),
    (0.00031185, 4.88277, 536.80451),
    (0.00011847, 2.4133, 419.48464),
    (0.00009166, 4.7598, 7.1135),
    (0.00003404, 3.3469, 1589.0729),
    (0.00003203, 5.2108, 735.8765),
    (0.00003176, 2.793, 103.0928),
    (0.00002806, 3.7422, 515.4639),
    (0.00002677, 4.3305, 1052.2684),
    (0.000026, 3.6344, 206.1855),
    (0.00002412, 1.4695, 426.5982),
    (0.00002101, 3.9276, 639.8973),
    (0.00001646, 4.4163, 1066.4955),
    (0.00001641, 4.4163, 625.6702),
    (0.0000105, 3.1611, 213.2991),
    (0.00001025, 2.5543, 412.3711),
    (0.00000806, 2.678, 632.784),
    (0.00000741, 2.171, 1162.475),
    (0.00000677, 6.25, 838.969),
    (0.00000567, 4.577, 742.99),
    (0.00000485, 2.469, 949.176),
    (0.00000469, 4.71, 543.918),
    (0.00000445, 0.403, 323.505),
    (0.00000416, 5.368, 728.763),
    (0.00000402, 4.605, 309.278),
    (0.00000347, 4.681, 14.227),
    (0.00000338, 3.168, 956.289),
    (0.00000261, 5.343, 846.083),
    (0.00000247, 3.923, 942.062),
    (0.0000022, 4.842, 1368.66),
    (0.00000203, 5.6, 1155.361),
    (0.000002, 4.439, 1045.155),
    (0.00000197, 3.706, 2118.764),
    (0.00000196, 3.759, 199.072),
    (0.00000184, 4.265, 95.979),
    (0.0000018, 4.402, 532.872),
    (0.0000017, 4.846, 526.51),
    (0.00000146, 6.13, 533.623),
    (0.00000133, 1.322, 110.206),
    (0.00000132, 4.512, 525.759),
];

#[rustfmt::skip]
const JUPITER_R2: &[Term] = &[
    (0.00079645, 1.35866, 529.69097),
    (0.00008252, 5.7777, 522.5774),
    (0.0000703, 3.2748, 536.8045),
    (0.00005314, 1.8384, 1059.3819),
    (0.00001861, 2.9768, 7.1135),
    (0.00000964, 5.48, 515.464),
    (0.00000836, 4.199, 419.485),
    (0.00000498, 3.142, 0.0),
    (0.00000427, 2.228, 639.897),
    (0.00000406, 3.783, 1066.495),
    (0.00000377, 2.242, 1589.073),
    (0.00000363, 5.368, 206.186),
    (0.00000342, 6.099, 1052.268),
    (0.00000339, 6.127, 625.67),
    (0.00000333, 0.003, 426.598),
    (0.0000028, 4.262, 412.371),
    (0.00000257, 0.963, 632.784),
    (0.0000023, 0.705, 735.877),
    (0.00000201, 3.069, 543.918),
    (0.000002, 4.429, 103.093),
    (0.00000139, 2.932, 14.227),
    (0.00000114, 0.787, 728.763),
    (0.00000095, 1.7, 838.97),
    (0.00000086, 5.14, 323.51),
    (0.00000083, 0.06, 309.28),
    (0.0000008, 2.98, 742.99),
    (0.00000075, 1.6, 956.29),
    (0.0000007, 1.51, 213.3),
    (0.00000067, 5.47, 199.07),
    (0.00000062, 6.1, 1045.15),
    (0.00000056, 0.96, 1162.47),
    (0.00000052, 5.58, 942.06),
    (0.0000005, 2.72, 532.87),
    (0.00000045, 5.52, 508.35),
    (0.00000044, 0.27, 526.51),
    (0.0000004, 5.95, 95.98),
];

#[rustfmt::skip]
const JUPITER_R3: &[Term] = &[
    (0.00003519, 6.058, 529.691),
    (0.00001073, 1.6732, 536.8045),
    (0.00000916, 1.413, 522.577),
    (0.00000342, 0.523, 1059.382),
    (0.00000255, 1.196, 7.114),
    (0.00000222, 0.952, 515.464),
    (0.0000009, 3.14, 0.0),
    (0.00000069, 2.27, 1066.5),
    (0.00000058, 1.41, 543.92),
    (0.00000058, 0.53, 639.9),
    (0.00000051, 5.98, 412.37),
    (0.00000047, 1.58, 625.67),
    (0.00000043, 6.12, 419.48),
    (0.00000037, 1.18, 14.23),
    (0.00000034, 1.67, 1052.27),
    (0.00000034, 0.85, 206.19),
    (0.00000031, 1.04, 1589.07),
    (0.0000003, 4.63, 426.6),
    (0.00000021, 2.5, 728.76),
    (0.00000015, 0.89, 199.07),
    (0.00000014, 0.96, 508.35),
    (0.00000013, 1.5, 1045.15),
    (0.00000012, 2.61, 735.88),
    (0.00000012, 3.56, 323.51),
    (0.00000011, 1.79, 309.28),
    (0.00000011, 6.28, 956.29),
    (0.0000001, 6.26, 103.09),
    (0.00000009, 3.45, 838.97),
];

#[rustfmt::skip]
const JUPITER_R4: &[Term] = &[
    (0.00000129, 0.084, 536.805),
    (0.00000113, 4.249, 529.691),
    (0.00000083, 3.3, 522.58),
    (0.00000038, 2.73, 515.46),
    (0.00000027, 5.69, 7.11),
    (0.00000018, 5.4, 1059.38),
    (0.00000013, 6.02, 543.92),
    (0.00000009, 0.77, 1066.5),
    (0.00000008, 5.68, 14.23),
    (0.00000007, 1.43, 412.37),
    (0.00000006, 5.12, 639.9),
    (0.00000005, 3.34, 625.67),
    (0.00000003, 3.4, 1052.27),
    (0.00000003, 4.16, 728.76),
    (0.00000003, 2.9, 426.6),
];

#[rustfmt::skip]
const JUPITER_R5: &[Term] = &[
    (0.00000011, 4.75, 536.8),
    (0.00000004, 5.92, 522.58),
    (0.00000002, 5.57, 515.46),
    (0.00000002, 4.3, 543.92),
    (0.00000002, 3.69, 7.11),
    (0.00000002, 4.13, 1059.38),
    (0.00000002, 5.49, 1066.5),
];

pub(super) static JUPITER: VsopModel = VsopModel {
    lon: &[JUPITER_L0, JUPITER_L1, JUPITER_L2, JUPITER_L3, JUPITER_L4, JUPITER_L5],
    lat: &[JUPITER_B0, JUPITER_B1, JUPITER_B2, JUPITER_B3, JUPITER_B4, JUPITER_B5],
    rad: &[JUPITER_R0, JUPITER_R1, JUPITER_R2, JUPITER_R3, JUPITER_R4, JUPITER_R5],
};

#[rustfmt::skip]
const SATURN_L0: &[Term] = &[
    (0.87401354, 0.0, 0.0),
    (0.1110766, 3.9620509, 213.29909544),
    (0.01414151, 4.5858152, 7.113547),
    (0.00398379, 0.52112, 206.185548),
    (0.00350769, 3.303299, 426.598191),
    (0.00206816, 0.246584, 103.092774),
    (0.00079271, 3.84007, 220.41264),
    (0.0002399, 4.66977, 110.20632),
    (0.00016574, 0.43719, 419.48464),
    (0.0001582, 0.93809, 632.78374),
    (0.00015054, 2.7167, 639.89729),
    (0.00014907, 5.76903, 316.39187),
    (0.0001461, 1.56519, 3.93215),
    (0.0001316, 4.44891, 14.22709),
    (0.00013005, 5.98119, 11.0457),
    (0.00010725, 3.1294, 202.2534),
    (0.00006126, 1.7633, 277.035),
    (0.00005863, 0.2366, 529.691),
    (0.00005228, 4.2078, 3.1814),
    (0.0000502, 3.1779, 433.7117),
    (0.00004593, 0.6198, 199.072),
    (0.00004006, 2.2448, 63.7359),
    (0.00003874, 3.2228, 138.5175),
    (0.00003269, 0.7749, 949.1756),
    (0.00002954, 0.9828, 95.9792),
    (0.00002461, 2.0316, 735.8765),
    (0.00001758, 3.2658, 522.5774),
    (0.0000164, 5.505, 846.0828),
    (0.00001581, 4.3727, 309.2783),
    (0.00001391, 4.0233, 323.5054),
    (0.00001124, 2.8373, 415.5525),
    (0.00001087, 4.1834, 2.4477),
    (0.00001017, 3.717, 227.5262),
    (0.00000957, 0.507, 1265.567),
    (0.00000853, 3.421, 175.166),
    (0.00000849, 3.191, 209.367),
    (0.00000789, 5.007, 0.963),
    (0.00000749, 2.144, 853.196),
    (0.00000744, 5.253, 224.345),
    (0.00000687, 1.747, 1052.268),
    (0.00000654, 1.599, 0.048),
    (0.00000634, 2.299, 412.371),
    (0.00000625, 0.97, 210.118),
    (0.0000058, 3.093, 74.782),
    (0.00000546, 2.127, 350.332),
    (0.00000543, 1.518, 9.561),
    (0.0000053, 4.449, 117.32),
    (0.00000478, 2.965, 137.033),
    (0.00000474, 5.475, 742.99),
    (0.00000452, 1.044, 490.334),
    (0.00000449, 1.29, 127.472),
    (0.00000372, 2.278, 217.231),
    (0.00000355, 3.013, 838.969),
    (0.00000347, 1.539, 340.771),
    (0.00000343, 0.246, 0.521),
    (0.0000033, 0.247, 1581.959),
    (0.00000322, 0.961, 203.738),
    (0.00000322, 2.572, 647.011),
    (0.00000309, 3.495, 216.48),
    (0.00000287, 2.37, 351.817),
    (0.00000278, 0.4, 211.815),
    (0.00000249, 1.47, 1368.66),
    (0.00000227, 4.91, 12.53),
    (0.0000022, 4.204, 200.769),
    (0.00000209, 1.345, 625.67),
    (0.00000208, 0.483, 1162.475),
    (0.00000208, 1.283, 39.357),
    (0.00000204, 6.011, 265.989),
    (0.00000185, 3.503, 149.563),
    (0.00000184, 0.973, 4.193),
    (0.00000182, 5.491, 2.921),
    (0.00000174, 1.863, 0.751),
    (0.00000165, 0.44, 5.417),
    (0.00000149, 5.736, 52.69),
    (0.00000148, 1.535, 5.629),
    (0.00000146, 6.231, 195.14),
    (0.0000014, 4.295, 21.341),
    (0.00000131, 4.068, 10.295),
    (0.00000125, 6.277, 1898.351),
    (0.00000122, 1.976, 4.666),
    (0.00000118, 5.341, 554.07),
    (0.00000117, 2.679, 1155.361),
    (0.00000114, 5.594, 1059.382),
    (0.00000112, 1.105, 191.208),
    (0.0000011, 0.166, 1.484),
    (0.00000109, 3.438, 536.805),
    (0.00000107, 4.012, 956.289),
    (0.00000104, 2.192, 88.866),
    (0.00000103, 1.197, 1685.052),
    (0.00000101, 4.965, 269.921),
];

#[rustfmt::skip]
const SATURN_L1: &[Term] = &[
    (213.54295596, 0.0, 0.0),
    (0.01296855, 1.8282054, 213.2990954),
    (0.00564348, 2.885001, 7.113547),
    (0.00107679, 2.277699, 206.185548),
    (0.00098323, 1.0807, 426.59819),
    (0.00040255, 2.04128, 220.41264),
    (0.00019942, 1.27955, 103.09277),
    (0.00010512, 2.7488, 14.22709),
    (0.00006939, 0.4049, 639.8973),
    (0.00004803, 2.4419, 419.4846),
    (0.00004056, 2.9217, 110.2063),
    (0.00003769, 3.6497, 3.9322),
    (0.00003385, 2.4169, 3.1814),
    (0.00003302, 1.2626, 433.7117),
    (0.00003071, 2.3274, 199.072),
    (0.00001953, 3.5639, 11.0457),
    (0.00001249, 2.628, 95.9792),
    (0.00000922, 1.961, 227.526),
    (0.00000706, 4.417, 529.691),
    (0.0000065, 6.174, 202.253),
    (0.00000628, 6.111, 309.278),
    (0.00000487, 6.04, 853.196),
    (0.00000479, 4.988, 522.577),
    (0.00000468, 4.617, 63.736),
    (0.00000417, 2.117, 323.505),
    (0.00000408, 1.299, 209.367),
    (0.00000352, 2.317, 632.784),
    (0.00000344, 3.959, 412.371),
    (0.0000034, 3.634, 316.392),
    (0.00000336, 3.772, 735.877),
    (0.00000332, 2.861, 210.118),
    (0.00000289, 2.733, 117.32),
    (0.00000281, 5.744, 2.448),
    (0.00000266, 0.543, 647.011),
    (0.0000023, 1.644, 216.48),
    (0.00000192, 2.965, 224.345),
    (0.00000173, 4.077, 846.083),
    (0.00000167, 2.597, 21.341),
    (0.00000136, 2.286, 10.295),
    (0.00000131, 3.441, 742.99),
    (0.00000128, 4.095, 217.231),
    (0.00000109, 6.161, 415.552),
    (0.00000098, 4.73, 838.97),
    (0.00000094, 3.48, 1052.27),
    (0.00000092, 3.95, 88.87),
    (0.00000087, 1.22, 440.83),
    (0.00000083, 3.11, 625.67),
    (0.00000078, 6.24, 302.16),
    (0.00000067, 0.29, 4.67),
    (0.00000066, 5.65, 9.56),
    (0.00000062, 4.29, 127.47),
    (0.00000062, 1.83, 195.14),
    (0.00000058, 2.48, 191.96),
    (0.00000057, 5.02, 137.03),
    (0.00000055, 0.28, 74.78),
    (0.00000054, 5.13, 490.33),
    (0.00000051, 1.46, 536.8),
    (0.00000047, 1.18, 149.56),
    (0.00000047, 5.15, 515.46),
    (0.00000046, 2.23, 956.29),
    (0.00000044, 2.71, 5.42),
    (0.0000004, 0.41, 269.92),
    (0.0000004, 3.89, 728.76),
    (0.00000038, 0.65, 422.67),
    (0.00000038, 2.53, 12.53),
    (0.00000037, 3.78, 2.92),
    (0.00000035, 6.08, 5.63),
    (0.00000034, 3.21, 1368.66),
    (0.00000033, 4.64, 277.03),
    (0.00000033, 5.43, 1066.5),
    (0.00000033, 0.3, 351.82),
    (0.00000032, 4.39, 1155.36),
    (0.00000031, 2.43, 52.69),
    (0.0000003, 2.84, 203.0),
    (0.0000003, 6.19, 284.15),
    (0.0000003, 3.39, 1059.38),
    (0.00000029, 2.03, 330.62),
    (0.00000028, 2.74, 265.99),
    (0.00000026, 4.51, 340.77),
];

#[rustfmt::skip]
const SATURN_L2: &[Term] = &[
    (0.00116441, 1.179879, 7.113547),
    (0.00091921, 0.07425, 213.2991),
    (0.00090592, 0.0, 0.0),
    (0.00015277, 4.06492, 206.18555),
    (0.00010631, 0.25778, 220.41264),
    (0.00010605, 5.40964, 426.59819),
    (0.00004265, 1.046, 14.2271),
    (0.00001216, 2.9186, 103.0928),
    (0.00001165, 4.6094, 639.8973),
    (0.00001082, 5.6913, 433.7117),
    (0.00001045, 4.0421, 199.072),
    (0.0000102, 0.6337, 3.1814),
    (0.00000634, 4.388, 419.485),
    (0.00000549, 5.573, 3.932),
    (0.00000457, 1.268, 110.206),
    (0.00000425, 0.209, 227.526),
    (0.00000274, 4.288, 95.979),
    (0.00000162, 1.381, 11.046),
    (0.00000129, 1.566, 309.278),
    (0.00000117, 3.881, 853.196),
    (0.00000105, 4.9, 647.011),
    (0.00000101, 0.893, 21.341),
    (0.00000096, 2.91, 316.39),
    (0.00000095, 5.63, 412.37),
    (0.00000085, 5.73, 209.37),
    (0.00000083, 6.05, 216.48),
    (0.00000082, 1.02, 117.32),
    (0.00000075, 4.76, 210.12),
    (0.00000067, 0.46, 522.58),
    (0.00000066, 0.48, 10.29),
    (0.00000064, 0.35, 323.51),
    (0.00000061, 4.88, 632.78),
    (0.00000053, 2.75, 529.69),
    (0.00000046, 5.69, 440.83),
    (0.00000045, 1.67, 202.25),
    (0.00000042, 5.71, 88.87),
    (0.00000032, 0.07, 63.74),
    (0.00000032, 1.67, 302.16),
    (0.00000031, 4.16, 191.96),
    (0.00000027, 0.83, 224.34),
    (0.00000025, 5.66, 735.88),
    (0.0000002, 5.94, 217.23),
    (0.00000018, 4.9, 625.67),
    (0.00000017, 1.63, 742.99),
    (0.00000016, 0.58, 515.46),
    (0.00000014, 0.21, 838.97),
    (0.00000014, 3.76, 195.14),
    (0.00000012, 4.72, 203.0),
    (0.00000012, 0.13, 234.64),
    (0.00000012, 3.12, 846.08),
    (0.00000011, 5.92, 536.8),
    (0.00000011, 5.6, 728.76),
    (0.00000011, 3.2, 1066.5),
    (0.0000001, 4.99, 422.67),
    (0.0000001, 0.26, 330.62),
    (0.0000001, 4.15, 860.31),
    (0.00000009, 0.46, 956.29),
    (0.00000008, 2.14, 269.92),
    (0.00000008, 5.25, 429.78),
    (0.00000008, 4.03, 9.56),
    (0.00000007, 5.4, 1052.27),
    (0.00000006, 4.46, 284.15),
    (0.00000006, 5.93, 405.26),
];

#[rustfmt::skip]
const SATURN_L3: &[Term] = &[
    (0.00016039, 5.73945, 7.11355),
    (0.0000425, 4.5854, 213.2991),
    (0.00001907, 4.7608, 220.4126),
    (0.00001466, 5.9133, 206.1855),
    (0.00001162, 5.6197, 14.2271),
    (0.00001067, 3.6082, 426.5982),
    (0.00000239, 3.861, 433.712),
    (0.00000237, 5.768, 199.072),
    (0.00000166, 5.116, 3.181),
    (0.00000151, 2.736, 639.897),
    (0.00000131, 4.743, 227.526),
    (0.00000063, 0.23, 419.48),
    (0.00000062, 4.74, 103.09),
    (0.0000004, 5.47, 21.34),
    (0.0000004, 5.96, 95.98),
    (0.00000039, 5.83, 110.21),
    (0.00000028, 3.01, 647.01),
    (0.00000025, 0.99, 3.93),
    (0.00000019, 1.92, 853.2),
    (0.00000018, 4.97, 10.29),
    (0.00000018, 1.03, 412.37),
    (0.00000018, 4.2, 216.48),
    (0.00000018, 3.32, 309.28),
    (0.00000016, 3.9, 440.83),
    (0.00000016, 5.62, 117.32),
    (0.00000013, 1.18, 88.87),
    (0.00000011, 5.58, 11.05),
    (0.00000011, 5.93, 191.96),
    (0.0000001, 3.95, 209.37),
    (0.00000009, 3.39, 302.16),
    (0.00000008, 4.88, 323.51),
    (0.00000007, 0.38, 632.78),
    (0.00000006, 2.25, 522.58),
    (0.00000006, 1.06, 210.12),
    (0.00000005, 4.64, 234.64),
    (0.00000004, 3.14, 0.0),
    (0.00000004, 2.31, 515.46),
    (0.00000003, 2.2, 860.31),
    (0.00000003, 0.59, 529.69),
    (0.00000003, 4.93, 224.34),
    (0.00000003, 0.42, 625.67),
    (0.00000002, 4.77, 330.62),
    (0.00000002, 3.35, 429.78),
    (0.00000002, 3.2, 202.25),
    (0.00000002, 1.19, 1066.5),
    (0.00000002, 1.35, 405.26),
    (0.00000002, 4.16, 223.59),
    (0.00000002, 3.07, 654.12),
];

#[rustfmt::skip]
const SATURN_L4: &[Term] = &[
    (0.00001662, 3.9983, 7.1135),
    (0.00000257, 2.984, 220.413),
    (0.00000236, 3.902, 14.227),
    (0.00000149, 2.741, 213.299),
    (0.00000114, 3.142, 0.0),
    (0.0000011, 1.515, 206.186),
    (0.00000068, 1.72, 426.6),
    (0.0000004, 2.05, 433.71),
    (0.00000038, 1.24, 199.07),
    (0.00000031, 3.01, 227.53),
    (0.00000015, 0.83, 639.9),
    (0.00000009, 3.71, 21.34),
    (0.00000006, 2.42, 419.48),
    (0.00000006, 1.16, 647.01),
    (0.00000004, 1.45, 95.98),
    (0.00000004, 2.12, 440.83),
    (0.00000003, 4.09, 110.21),
    (0.00000003, 2.77, 412.37),
    (0.00000003, 3.01, 88.87),
    (0.00000003, 0.0, 853.2),
    (0.00000003, 0.39, 103.09),
    (0.00000002, 3.78, 117.32),
    (0.00000002, 2.83, 234.64),
    (0.00000002, 5.08, 309.28),
    (0.00000002, 2.24, 216.48),
    (0.00000002, 5.19, 302.16),
    (0.00000001, 1.55, 191.96),
];

#[rustfmt::skip]
const SATURN_L5: &[Term] = &[
    (0.00000124, 2.259, 7.114),
    (0.00000034, 2.16, 14.23),
    (0.00000028, 1.2, 220.41),
    (0.00000006, 1.22, 227.53),
    (0.00000005, 0.24, 433.71),
    (0.00000004, 6.23, 426.6),
    (0.00000003, 2.97, 199.07),
    (0.00000003, 4.29, 206.19),
    (0.00000002, 6.25, 213.3),
    (0.00000001, 5.28, 639.9),
    (0.00000001, 0.24, 440.83),
    (0.00000001, 3.14, 0.0),
];

#[rustfmt::skip]
const SATURN_B0: &[Term] = &[
    (0.04330678, 3.6028443, 213.2990954),
    (0.00240348, 2.852385, 426.598191),
    (0.00084746, 0.0, 0.0),
    (0.00034116, 0.57297, 206.18555),
    (0.00030863, 3.48442, 220.41264),
    (0.00014734, 2.11847, 639.89729),
    (0.00009917, 5.79, 419.4846),
    (0.00006994, 4.736, 7.1135),
    (0.00004808, 5.4331, 316.3919),
    (0.00004788, 4.9651, 110.2063),
    (0.00003432, 2.7326, 433.7117),
    (0.00001506, 6.013, 103.0928),
    (0.0000106, 5.631, 529.691),
    (0.00000969, 5.204, 632.784),
    (0.00000942, 1.396, 853.196),
    (0.00000708, 3.803, 323.505),
    (0.00000552, 5.131, 202.253),
    (0.000004, 3.359, 227.526),
    (0.00000319, 3.626, 209.367),
    (0.00000316, 1.997, 647.011),
    (0.00000314, 0.465, 217.231),
    (0.00000284, 4.886, 224.345),
    (0.00000236, 2.139, 11.046),
    (0.00000215, 5.95, 846.083),
    (0.00000209, 2.12, 415.552),
    (0.00000207, 0.73, 199.072),
    (0.00000179, 2.954, 63.736),
    (0.00000141, 0.644, 490.334),
    (0.00000139, 4.595, 14.227),
    (0.00000139, 1.998, 735.877),
    (0.00000135, 5.245, 742.99),
    (0.00000122, 3.115, 522.577),
    (0.00000116, 3.109, 216.48),
    (0.00000114, 0.963, 210.118),
];

#[rustfmt::skip]
const SATURN_B1: &[Term] = &[
    (0.00397555, 5.3329, 213.299095),
    (0.00049479, 3.14159, 0.0),
    (0.00018572, 6.09919, 426.59819),
    (0.00014801, 2.30586, 206.18555),
    (0.00009644, 1.6967, 220.4126),
    (0.00003757, 1.2543, 419.4846),
    (0.00002717, 5.9117, 639.8973),
    (0.00001455, 0.8516, 433.7117),
    (0.00001291, 2.9177, 7.1135),
    (0.00000853, 0.436, 316.392),
    (0.00000298, 0.919, 632.784),
    (0.00000292, 5.316, 853.196),
    (0.00000284, 1.619, 227.526),
    (0.00000275, 3.889, 103.093),
    (0.00000172, 0.052, 647.011),
    (0.00000166, 2.444, 199.072),
    (0.00000158, 5.209, 110.206),
    (0.00000128, 1.207, 529.691),
    (0.0000011, 2.457, 217.231),
    (0.00000082, 2.76, 210.12),
    (0.00000081, 2.86, 14.23),
    (0.00000069, 1.66, 202.25),
    (0.00000065, 1.26, 216.48),
    (0.00000061, 1.25, 209.37),
    (0.00000059, 1.82, 323.51),
    (0.00000046, 0.82, 440.83),
    (0.00000036, 1.82, 224.34),
    (0.00000034, 2.84, 117.32),
    (0.00000033, 1.31, 412.37),
    (0.00000032, 1.19, 846.08),
    (0.00000027, 4.65, 1066.5),
    (0.00000027, 4.44, 11.05),
];

#[rustfmt::skip]
const SATURN_B2: &[Term] = &[
    (0.0002063, 0.50482, 213.2991),
    (0.0000372, 3.9983, 206.1855),
    (0.00001627, 6.1819, 220.4126),
    (0.00001346, 0.0, 0.0),
    (0.00000706, 3.039, 419.485),
    (0.00000365, 5.099, 426.598),
    (0.0000033, 5.279, 433.712),
    (0.00000219, 3.828, 639.897),
    (0.00000139, 1.043, 7.114),
    (0.00000104, 6.157, 227.526),
    (0.00000093, 1.98, 316.39),
    (0.00000071, 4.15, 199.07),
    (0.00000052, 2.88, 632.78),
    (0.00000049, 4.43, 647.01),
    (0.00000041, 3.16, 853.2),
    (0.00000029, 4.53, 210.12),
    (0.00000024, 1.12, 14.23),
    (0.00000021, 4.35, 217.23),
    (0.0000002, 5.31, 440.83),
    (0.00000018, 0.85, 110.21),
    (0.00000017, 5.68, 216.48),
    (0.00000016, 4.26, 103.09),
    (0.00000014, 3.0, 412.37),
    (0.00000012, 2.53, 529.69),
    (0.00000008, 3.32, 202.25),
    (0.00000007, 5.56, 209.37),
    (0.00000007, 0.29, 323.51),
    (0.00000006, 1.16, 117.32),
    (0.00000006, 3.61, 860.31),
];

#[rustfmt::skip]
const SATURN_B3: &[Term] = &[
    (0.00000666, 1.99, 213.299),
    (0.00000632, 5.698, 206.186),
    (0.00000398, 0.0, 0.0),
    (0.00000188, 4.338, 220.413),
    (0.00000092, 4.84, 419.48),
    (0.00000052, 3.42, 433.71),
    (0.00000042, 2.38, 426.6),
    (0.00000026, 4.4, 227.53),
    (0.00000021, 5.85, 199.07),
    (0.00000018, 1.99, 639.9),
    (0.00000011, 5.37, 7.11),
    (0.0000001, 2.55, 647.01),
    (0.00000007, 3.46, 316.39),
    (0.00000006, 4.8, 632.78),
    (0.00000006, 0.02, 210.12),
    (0.00000006, 3.52, 440.83),
    (0.00000005, 5.64, 14.23),
    (0.00000005, 1.22, 853.2),
    (0.00000004, 4.71, 412.37),
    (0.00000003, 0.63, 103.09),
    (0.00000002, 3.72, 216.48),
];

#[rustfmt::skip]
const SATURN_B4: &[Term] = &[
    (0.0000008, 1.12, 206.19),
    (0.00000032, 3.12, 213.3),
    (0.00000017, 2.48, 220.41),
    (0.00000012, 3.14, 0.0),
    (0.00000009, 0.38, 419.48),
    (0.00000006, 1.56, 433.71),
    (0.00000005, 2.63, 227.53),
    (0.00000005, 1.28, 199.07),
    (0.00000001, 1.43, 426.6),
    (0.00000001, 0.67, 647.01),
    (0.00000001, 1.72, 440.83),
    (0.00000001, 6.18, 639.9),
];

#[rustfmt::skip]
const SATURN_B5: &[Term] = &[
    (0.00000008, 2.82, 206.19),
    (0.00000001, 0.51, 220.41),
];

#[rustfmt::skip]
const SATURN_R0: &[Term] = &[
    (9.55758136, 0.0, 0.0),
    (0.52921382, 2.3922622, 213.29909544),
    (0.0187368, 5.2354961, 206.1855484),
    (0.01464664, 1.6476305, 426.5981909),
    (0.00821891, 5.9352, 316.39187),
    (0.00547507, 5.015326, 103.092774),
    (0.00371684, 2.271148, 220.412642),
    (0.00361778, 3.139043, 7.113547),
    (0.00140618, 5.704067, 632.783739),
    (0.00108975, 3.293136, 110.206321),
    (0.00069007, 5.941, 419.48464),
    (0.00061053, 0.94038, 639.89729),
    (0.00048913, 1.55733, 202.2534),
    (0.00034144, 0.19519, 277.03499),
    (0.00032402, 5.47085, 949.17561),
    (0.00020937, 0.46349, 735.87651),
    (0.00020839, 1.52103, 433.71174),
    (0.00020747, 5.33256, 199.072),
    (0.00015298, 3.05944, 529.69097),
    (0.00014296, 2.60434, 323.50542),
    (0.00012884, 1.64892, 138.5175),
    (0.00011993, 5.98051, 846.08283),
    (0.0001138, 1.73106, 522.57742),
    (0.00009796, 5.2048, 1265.5675),
    (0.00007753, 5.8519, 95.9792),
    (0.00006771, 3.0043, 14.2271),
    (0.00006466, 0.1773, 1052.2684),
    (0.0000585, 1.4552, 415.5525),
    (0.00005307, 0.5974, 63.7359),
    (0.00004696, 2.1492, 227.5262),
    (0.00004044, 1.6401, 209.3669),
    (0.00003688, 0.7802, 412.3711),
    (0.00003461, 1.8509, 175.1661),
    (0.0000342, 4.9455, 1581.9593),
    (0.00003401, 0.5539, 350.3321),
    (0.00003376, 3.6953, 224.3448),
    (0.00002976, 5.6847, 210.1177),
    (0.00002885, 1.3876, 838.9693),
    (0.00002881, 0.1796, 853.1964),
    (0.00002508, 3.5385, 742.9901),
    (0.00002448, 6.1841, 1368.6603),
    (0.00002406, 2.9656, 117.3199),
    (0.00002174, 0.0151, 340.7709),
    (0.00002024, 5.0541, 11.0457),
];

#[rustfmt::skip]
const SATURN_R1: &[Term] = &[
    (0.06182981, 0.2584352, 213.2990954),
    (0.00506578, 0.711147, 206.185548),
    (0.00341394, 5.796358, 426.598191),
    (0.00188491, 0.472157, 220.412642),
    (0.00186262, 3.141593, 0.0),
    (0.00143891, 1.407449, 7.113547),
    (0.00049621, 6.01744, 103.09277),
    (0.00020928, 5.09246, 639.89729),
    (0.00019953, 1.1756, 419.48464),
    (0.0001884, 1.6082, 110.20632),
    (0.00013877, 0.75886, 199.072),
    (0.00012893, 5.9433, 433.71174),
    (0.00005397, 1.2885, 14.2271),
    (0.00004869, 0.8679, 323.5054),
    (0.00004247, 0.393, 227.5262),
    (0.00003252, 1.2585, 95.9792),
    (0.00003081, 3.4366, 522.5774),
    (0.00002909, 4.6068, 202.2534),
    (0.00002856, 2.1673, 735.8765),
    (0.00001988, 2.4505, 412.3711),
    (0.00001941, 6.0239, 209.3669),
    (0.00001581, 1.2919, 210.1177),
    (0.0000134, 4.308, 853.1964),
    (0.00001316, 1.253, 117.3199),
    (0.00001203, 1.8665, 316.3919),
    (0.00001091, 0.0753, 216.4805),
    (0.00000966, 0.48, 632.784),
    (0.00000954, 5.152, 647.011),
    (0.00000898, 0.983, 529.691),
    (0.00000882, 1.885, 1052.268),
    (0.00000874, 1.402, 224.345),
    (0.00000785, 3.064, 838.969),
    (0.0000074, 1.382, 625.67),
    (0.00000658, 4.144, 309.278),
    (0.0000065, 1.725, 742.99),
    (0.00000613, 3.033, 63.736),
    (0.00000599, 2.549, 217.231),
    (0.00000503, 2.13, 3.932),
];

#[rustfmt::skip]
const SATURN_R2: &[Term] = &[
    (0.00436902, 4.786717, 213.299095),
    (0.00071923, 2.5007, 206.18555),
    (0.00049767, 4.97168, 220.41264),
    (0.00043221, 3.8694, 426.59819),
    (0.00029646, 5.9631, 7.11355),
    (0.00004721, 2.4753, 199.072),
    (0.00004142, 4.1067, 433.7117),
    (0.00003789, 3.0977, 639.8973),
    (0.00002964, 1.3721, 103.0928),
    (0.00002556, 2.8507, 419.4846),
    (0.00002327, 0.0, 0.0),
    (0.00002208, 6.2759, 110.2063),
    (0.00002188, 5.8555, 14.2271),
    (0.00001957, 4.9245, 227.5262),
    (0.00000924, 5.464, 323.505),
    (0.00000706, 2.971, 95.979),
    (0.00000546, 4.129, 412.371),
    (0.00000431, 5.178, 522.577),
    (0.00000405, 4.173, 209.367),
    (0.00000391, 4.481, 216.48),
    (0.00000374, 5.834, 117.32),
    (0.00000361, 3.277, 647.011),
    (0.00000356, 3.192, 210.118),
    (0.00000326, 2.269, 853.196),
    (0.00000207, 4.022, 735.877),
    (0.00000204, 0.088, 202.253),
    (0.0000018, 3.597, 632.784),
    (0.00000178, 4.097, 440.825),
    (0.00000154, 3.135, 625.67),
    (0.00000148, 0.136, 302.165),
    (0.00000133, 2.594, 191.958),
    (0.00000132, 5.933, 309.278),
];

#[rustfmt::skip]
const SATURN_R3: &[Term] = &[
    (0.00020315, 3.02187, 213.2991),
    (0.00008924, 3.1914, 220.4126),
    (0.00006909, 4.3517, 206.1855),
    (0.00004087, 4.2241, 7.1135),
    (0.00003879, 2.0106, 426.5982),
    (0.00001071, 4.2036, 199.072),
    (0.00000907, 2.283, 433.712),
    (0.00000606, 3.175, 227.526),
    (0.00000597, 4.135, 14.227),
    (0.00000483, 1.173, 639.897),
    (0.00000393, 0.0, 0.0),
    (0.00000229, 4.698, 419.485),
    (0.00000188, 4.59, 110.206),
    (0.0000015, 3.202, 103.093),
    (0.00000121, 3.768, 323.505),
    (0.00000102, 4.71, 95.979),
    (0.00000101, 5.819, 412.371),
    (0.00000093, 1.44, 647.01),
    (0.00000084, 2.63, 216.48),
    (0.00000073, 4.15, 117.32),
    (0.00000062, 2.31, 440.83),
    (0.00000055, 0.31, 853.2),
    (0.0000005, 2.39, 209.37),
    (0.00000045, 4.37, 191.96),
    (0.00000041, 0.69, 522.58),
    (0.0000004, 1.84, 302.16),
    (0.00000038, 5.94, 88.87),
    (0.00000032, 4.01, 21.34),
];

#[rustfmt::skip]
const SATURN_R4: &[Term] = &[
    (0.00001202, 1.415, 220.4126),
    (0.00000708, 1.162, 213.299),
    (0.00000516, 6.24, 206.186),
    (0.00000427, 2.469, 7.114),
    (0.00000268, 0.187, 426.598),
    (0.0000017, 5.959, 199.072),
    (0.0000015, 0.48, 433.712),
    (0.00000145, 1.442, 227.526),
    (0.00000121, 2.405, 14.227),
    (0.00000047, 5.57, 639.9),
    (0.00000019, 5.86, 647.01),
    (0.00000017, 0.53, 440.83),
    (0.00000016, 2.9, 110.21),
    (0.00000015, 0.3, 419.48),
    (0.00000014, 1.3, 412.37),
    (0.00000013, 2.09, 323.51),
    (0.00000011, 0.22, 95.98),
    (0.00000011, 2.46, 117.32),
    (0.0000001, 3.14, 0.0),
    (0.00000009, 1.56, 88.87),
    (0.00000009, 2.28, 21.34),
    (0.00000009, 0.68, 216.48),
    (0.00000008, 1.27, 234.64),
];

#[rustfmt::skip]
const SATURN_R5: &[Term] = &[
    (0.00000129, 5.913, 220.413),
    (0.00000032, 0.69, 7.11),
    (0.00000027, 5.91, 227.53),
    (0.0000002, 4.95, 433.71),
    (0.0000002, 0.67, 14.23),
    (0.00000014, 2.67, 206.19),
    (0.00000014, 1.46, 199.07),
    (0.00000013, 4.59, 426.6),
    (0.00000007, 4.63, 213.3),
    (0.00000005, 3.61, 639.9),
    (0.00000004, 4.9, 440.83),
    (0.00000003, 4.07, 647.01),
    (0.00000003, 4.66, 191.96),
    (0.00000003, 0.49, 323.51),
    (0.00000003, 3.18, 419.48),
    (0.00000002, 3.7, 88.87),
    (0.00000002, 3.32, 95.98),
    (0.00000002, 0.56, 117.32),
];

pub(super) static SATURN: VsopModel = VsopModel {
    lon: &[SATURN_L0, SATURN_L1, SATURN_L2, SATURN_L3, SATURN_L4, SATURN_L5],
    lat: &[SATURN_B0, SATURN_B1, SATURN_B2, SATURN_B3, SATURN_B4, SATURN_B5],
    rad: &[SATURN_R0, SATURN_R1, SATURN_R2, SATURN_R3, SATURN_R4, SATURN_R5],
};

#[rustfmt::skip]
const URANUS_L0: &[Term] = &[
    (5.48129294, 0.0, 0.0),
    (0.09260408, 0.8910642, 74.7815986),
    (0.01504248, 3.6271926, 1.4844727),
    (0.00365982, 1.899622, 73.297126),
    (0.00272328, 3.358237, 149.563197),
    (0.00070328, 5.39254, 63.7359),
    (0.00068893, 6.09292, 76.26607),
    (0.00061999, 2.26952, 2.96895),
    (0.00061951, 2.85099, 11.0457),
    (0.00026469, 3.14152, 71.81265),
    (0.00025711, 6.1138, 454.90937),
    (0.00021079, 4.36059, 148.07872),
    (0.00017819, 1.74437, 36.64856),
    (0.00014613, 4.73732, 3.93215),
    (0.00011163, 5.82682, 224.3448),
    (0.00010998, 0.48865, 138.5175),
    (0.00009527, 2.9552, 35.1641),
    (0.00007546, 5.2363, 109.9457),
    (0.0000422, 3.2333, 70.8494),
    (0.00004052, 2.2775, 151.0477),
    (0.0000349, 5.4831, 146.5943),
    (0.00003355, 1.0655, 4.4534),
    (0.00003144, 4.752, 77.7505),
    (0.00002927, 4.629, 9.5612),
    (0.00002922, 5.3524, 85.8273),
    (0.00002273, 4.366, 70.3282),
    (0.00002149, 0.6075, 38.133),
    (0.00002051, 1.5177, 0.1119),
    (0.00001992, 4.9244, 277.035),
    (0.00001667, 3.6274, 380.1278),
    (0.00001533, 2.5859, 52.6902),
    (0.00001376, 2.0428, 65.2204),
    (0.00001372, 4.1964, 111.4302),
    (0.00001284, 3.1135, 202.2534),
    (0.00001282, 0.5427, 222.8603),
    (0.00001244, 0.9161, 2.4477),
    (0.00001221, 0.199, 108.4612),
    (0.00001151, 4.179, 33.6796),
    (0.0000115, 0.9334, 3.1814),
    (0.0000109, 1.775, 12.5302),
    (0.00001072, 0.2356, 62.2514),
    (0.00000946, 1.192, 127.472),
    (0.00000708, 5.183, 213.299),
    (0.00000653, 0.966, 78.714),
    (0.00000628, 0.182, 984.6),
    (0.00000607, 5.432, 529.691),
    (0.00000559, 3.358, 0.521),
    (0.00000524, 2.013, 299.126),
    (0.00000483, 2.106, 0.963),
    (0.00000471, 1.407, 184.727),
    (0.00000467, 0.415, 145.11),
    (0.00000434, 5.521, 183.243),
    (0.00000405, 5.987, 8.077),
    (0.00000399, 0.338, 415.552),
    (0.00000396, 5.87, 351.817),
    (0.00000379, 2.35, 56.622),
    (0.0000031, 5.833, 145.631),
    (0.000003, 5.644, 22.091),
    (0.00000294, 5.839, 39.618),
    (0.00000252, 1.637, 221.376),
    (0.00000249, 4.746, 225.829),
    (0.00000239, 2.35, 137.033),
    (0.00000224, 0.516, 84.343),
    (0.00000223, 2.843, 0.261),
    (0.0000022, 1.922, 67.668),
    (0.00000217, 6.142, 5.938),
    (0.00000216, 4.778, 340.771),
    (0.00000208, 5.58, 68.844),
    (0.00000202, 1.297, 0.048),
    (0.00000199, 0.956, 152.532),
    (0.00000194, 1.888, 456.394),
    (0.00000193, 0.916, 453.425),
    (0.00000187, 1.319, 0.16),
    (0.00000182, 3.536, 79.236),
    (0.00000173, 1.539, 160.609),
    (0.00000172, 5.68, 219.891),
    (0.0000017, 3.677, 5.417),
    (0.00000169, 5.879, 18.159),
    (0.00000165, 1.424, 106.977),
    (0.00000163, 3.05, 112.915),
    (0.00000158, 0.738, 54.175),
    (0.00000147, 1.263, 59.804),
    (0.00000143, 1.3, 35.425),
    (0.00000139, 5.386, 32.195),
    (0.00000139, 4.26, 909.819),
    (0.00000124, 1.374, 7.114),
    (0.0000011, 2.027, 554.07),
    (0.00000109, 5.706, 77.963),
    (0.00000104, 5.028, 0.751),
    (0.00000104, 1.458, 24.379),
    (0.00000103, 0.681, 14.978),
];

#[rustfmt::skip]
const URANUS_L1: &[Term] = &[
    (75.02543122, 0.0, 0.0),
    (0.00154458, 5.242017, 74.781599),
    (0.00024456, 1.71256, 1.48447),
    (0.00009258, 0.4284, 11.0457),
    (0.00008266, 1.5022, 63.7359),
    (0.00007842, 1.3198, 149.5632),
    (0.00003899, 0.4648, 3.9322),
    (0.00002284, 4.1737, 76.2661),
    (0.00001927, 0.5301, 2.9689),
    (0.00001233, 1.5863, 70.8494),
    (0.00000791, 5.436, 3.181),
    (0.00000767, 1.996, 73.297),
    (0.00000482, 2.984, 85.827),
    (0.0000045, 4.138, 138.517),
    (0.00000446, 3.723, 224.345),
    (0.00000427, 4.731, 71.813),
    (0.00000354, 2.583, 148.079),
    (0.00000348, 2.454, 9.561),
    (0.00000317, 5.579, 52.69),
    (0.00000206, 2.363, 2.448),
    (0.00000189, 4.202, 56.622),
    (0.00000184, 0.284, 151.048),
    (0.0000018, 5.684, 12.53),
    (0.00000171, 3.001, 78.714),
    (0.00000158, 2.909, 0.963),
    (0.00000155, 5.591, 4.453),
    (0.00000154, 4.652, 35.164),
    (0.00000152, 2.942, 77.751),
    (0.00000143, 2.59, 62.251),
    (0.00000121, 4.148, 127.472),
    (0.00000116, 3.732, 65.22),
    (0.00000102, 4.188, 145.631),
    (0.00000102, 6.034, 0.112),
    (0.00000088, 3.99, 18.16),
    (0.00000088, 6.16, 202.25),
    (0.00000081, 2.64, 22.09),
    (0.00000072, 6.05, 70.33),
    (0.00000069, 4.05, 77.96),
    (0.00000059, 3.7, 67.67),
    (0.00000047, 3.54, 351.82),
    (0.00000044, 5.91, 7.11),
    (0.00000043, 5.72, 5.42),
    (0.00000039, 4.92, 222.86),
    (0.00000036, 5.9, 33.68),
    (0.00000036, 3.29, 8.08),
    (0.00000036, 3.33, 71.6),
    (0.00000035, 5.08, 38.13),
    (0.00000031, 5.62, 984.6),
    (0.00000031, 5.5, 59.8),
    (0.00000031, 5.46, 160.61),
    (0.0000003, 1.66, 447.8),
    (0.00000029, 1.15, 462.02),
    (0.00000029, 4.52, 84.34),
    (0.00000027, 5.54, 131.4),
    (0.00000027, 6.15, 299.13),
    (0.00000026, 4.99, 137.03),
    (0.00000025, 5.74, 380.13),
];

#[rustfmt::skip]
const URANUS_L2: &[Term] = &[
    (0.00053033, 0.0, 0.0),
    (0.00002358, 2.2601, 74.7816),
    (0.00000769, 4.526, 11.046),
    (0.00000552, 3.258, 63.736),
    (0.00000542, 2.276, 3.932),
    (0.00000529, 4.923, 1.484),
    (0.00000258, 3.691, 3.181),
    (0.00000239, 5.858, 149.563),
    (0.00000182, 6.218, 70.849),
    (0.00000054, 1.44, 76.27),
    (0.00000049, 6.03, 56.62),
    (0.00000045, 3.91, 2.45),
    (0.00000045, 0.81, 85.83),
    (0.00000038, 1.78, 52.69),
    (0.00000037, 4.46, 2.97),
    (0.00000033, 0.86, 9.56),
    (0.00000029, 5.1, 73.3),
    (0.00000024, 2.11, 18.16),
    (0.00000022, 5.99, 138.52),
    (0.00000022, 4.82, 78.71),
    (0.00000021, 2.4, 77.96),
    (0.00000021, 2.17, 224.34),
    (0.00000017, 2.54, 145.63),
    (0.00000017, 3.47, 12.53),
    (0.00000012, 0.02, 22.09),
    (0.00000011, 0.08, 127.47),
    (0.0000001, 5.16, 71.6),
    (0.0000001, 4.46, 62.25),
    (0.00000009, 4.26, 7.11),
    (0.00000008, 5.5, 67.67),
    (0.00000007, 1.25, 5.42),
    (0.00000006, 3.36, 447.8),
    (0.00000006, 5.45, 65.22),
    (0.00000006, 4.52, 151.05),
    (0.00000006, 5.73, 462.02),
];

#[rustfmt::skip]
const URANUS_L3: &[Term] = &[
    (0.00000121, 0.024, 74.782),
    (0.00000068, 4.12, 3.93),
    (0.00000053, 2.39, 11.05),
    (0.00000046, 0.0, 0.0),
    (0.00000045, 2.04, 3.18),
    (0.00000044, 2.96, 1.48),
    (0.00000025, 4.89, 63.74),
    (0.00000021, 4.55, 70.85),
    (0.0000002, 2.31, 149.56),
    (0.00000009, 1.58, 56.62),
    (0.00000004, 0.23, 18.16),
    (0.00000004, 5.39, 76.27),
    (0.00000004, 0.95, 77.96),
    (0.00000003, 4.98, 85.83),
    (0.00000003, 4.13, 52.69),
    (0.00000003, 0.37, 78.71),
    (0.00000002, 0.86, 145.63),
    (0.00000002, 5.66, 9.56),
];

#[rustfmt::skip]
const URANUS_L4: &[Term] = &[
    (0.00000114, 3.142, 0.0),
    (0.00000006, 4.58, 74.78),
    (0.00000003, 0.35, 11.05),
    (0.00000001, 3.42, 56.62),
];

#[rustfmt::skip]
const URANUS_B0: &[Term] = &[
    (0.01346278, 2.6187781, 74.7815986),
    (0.00062341, 5.08111, 149.5632),
    (0.00061601, 3.14159, 0.0),
    (0.00009964, 1.616, 76.2661),
    (0.00009926, 0.5763, 73.2971),
    (0.00003259, 1.2612, 224.3448),
    (0.00002972, 2.2437, 1.4845),
    (0.0000201, 6.0555, 148.0787),
    (0.00001522, 0.2796, 63.7359),
    (0.00000924, 4.038, 151.048),
    (0.00000761, 6.14, 71.813),
    (0.00000522, 3.321, 138.517),
    (0.00000463, 0.743, 85.827),
    (0.00000437, 3.381, 529.691),
    (0.00000435, 0.341, 77.751),
    (0.00000431, 3.554, 213.299),
    (0.0000042, 5.213, 11.046),
    (0.00000245, 0.788, 2.969),
    (0.00000233, 2.257, 222.86),
    (0.00000216, 1.591, 38.133),
    (0.0000018, 3.725, 299.126),
    (0.00000175, 1.236, 146.594),
    (0.00000174, 1.937, 380.128),
    (0.0000016, 5.336, 111.43),
    (0.00000144, 5.962, 35.164),
    (0.00000116, 5.739, 70.849),
    (0.00000106, 0.941, 70.328),
    (0.00000102, 2.619, 78.714),
];

#[rustfmt::skip]
const URANUS_B1: &[Term] = &[
    (0.00206366, 4.123943, 74.781599),
    (0.00008563, 0.3382, 149.5632),
    (0.00001726, 2.1219, 73.2971),
    (0.00001374, 0.0, 0.0),
    (0.00001369, 3.0686, 76.2661),
    (0.00000451, 3.777, 1.484),
    (0.000004, 2.848, 224.345),
    (0.00000307, 1.255, 148.079),
    (0.00000154, 3.786, 63.736),
    (0.00000112, 5.573, 151.048),
    (0.00000111, 5.329, 138.517),
    (0.00000083, 3.59, 71.81),
    (0.00000056, 3.4, 85.83),
    (0.00000054, 1.7, 77.75),
    (0.00000042, 1.21, 11.05),
    (0.00000041, 4.45, 78.71),
    (0.00000032, 3.77, 222.86),
    (0.0000003, 2.56, 2.97),
    (0.00000027, 5.34, 213.3),
    (0.00000026, 0.42, 380.13),
];

#[rustfmt::skip]
const URANUS_B2: &[Term] = &[
    (0.00009212, 5.8004, 74.7816),
    (0.00000557, 0.0, 0.0),
    (0.00000286, 2.177, 149.563),
    (0.00000095, 3.84, 73.3),
    (0.00000045, 4.88, 76.27),
    (0.0000002, 5.46, 1.48),
    (0.00000015, 0.88, 138.52),
    (0.00000014, 2.85, 148.08),
    (0.00000014, 5.07, 63.74),
    (0.0000001, 5.0, 224.34),
    (0.00000008, 6.27, 78.71),
];

#[rustfmt::skip]
const URANUS_B3: &[Term] = &[
    (0.00000268, 1.251, 74.782),
    (0.00000011, 3.14, 0.0),
    (0.00000006, 4.01, 149.56),
    (0.00000003, 5.78, 73.3),
];

#[rustfmt::skip]
const URANUS_B4: &[Term] = &[
    (0.00000006, 2.85, 74.78),
];

#[rustfmt::skip]
const URANUS_R0: &[Term] = &[
    (19.21264848, 0.0, 0.0),
    (0.88784984, 5.60377527, 74.78159857),
    (0.03440836, 0.328361, 73.2971259),
    (0.02055653, 1.7829517, 149.5631971),
    (0.00649322, 4.522473, 76.266071),
    (0.00602248, 3.860038, 63.735898),
    (0.00496404, 1.401399, 454.909367),
    (0.00338526, 1.580027, 138.517497),
    (0.00243508, 1.570866, 71.812653),
    (0.00190522, 1.998094, 1.484473),
    (0.00161858, 2.791379, 148.078724),
    (0.00143706, 1.383686, 11.0457),
    (0.00093192, 0.17437, 36.64856),
    (0.00089806, 3.66105, 109.94569),
    (0.00071424, 4.24509, 224.3448),
    (0.00046677, 1.39977, 35.16409),
    (0.00039026, 3.36235, 277.03499),
    (0.0003901, 1.66971, 70.84945),
    (0.00036755, 3.88649, 146.59425),
    (0.00030349, 0.701, 151.04767),
    (0.00029156, 3.18056, 77.75054),
    (0.00025786, 3.78538, 85.8273),
    (0.0002562, 5.25656, 380.12777),
    (0.00022637, 0.72519, 529.69097),
    (0.00020473, 2.7964, 70.32818),
    (0.00020472, 1.55589, 202.2534),
    (0.00017901, 0.55455, 2.96895),
    (0.00015503, 5.35405, 38.13304),
    (0.00014702, 4.90434, 108.46122),
    (0.00012897, 2.62154, 111.43016),
    (0.00012328, 5.96039, 127.4718),
    (0.00011959, 1.75044, 984.60033),
    (0.00011853, 0.99343, 52.6902),
    (0.00011696, 3.29826, 3.93215),
    (0.00011495, 0.43774, 65.22037),
    (0.00010793, 1.42105, 213.2991),
    (0.00009111, 4.9964, 62.2514),
    (0.00008421, 5.2535, 222.8603),
    (0.00008402, 5.0388, 415.5525),
    (0.00007449, 0.7949, 351.8166),
    (0.00007329, 3.9728, 183.2428),
    (0.00006046, 5.6796, 78.7138),
    (0.00005524, 3.115, 9.5612),
    (0.00005445, 5.1058, 145.1098),
    (0.00005238, 2.6296, 33.6796),
    (0.00004079, 3.2206, 340.7709),
    (0.00003919, 4.2502, 39.6175),
    (0.00003802, 6.1099, 184.7273),
    (0.00003781, 3.4584, 456.3938),
    (0.00003687, 2.4872, 453.4249),
    (0.00003102, 4.1403, 219.8914),
    (0.00002963, 0.8298, 56.6224),
    (0.00002942, 0.4239, 299.1264),
    (0.0000294, 2.1464, 137.033),
    (0.00002938, 3.6766, 140.002),
    (0.00002865, 0.31, 12.5302),
    (0.00002538, 4.8546, 131.4039),
    (0.00002364, 0.4425, 554.07),
    (0.00002183, 2.9404, 305.3462),
];

#[rustfmt::skip]
const URANUS_R1: &[Term] = &[
    (0.01479896, 3.6720571, 74.7815986),
    (0.00071212, 6.22601, 63.7359),
    (0.00068627, 6.13411, 149.5632),
    (0.0002406, 3.14159, 0.0),
    (0.00021468, 2.60177, 76.26607),
    (0.00020857, 5.24625, 11.0457),
    (0.00011405, 0.01848, 70.84945),
    (0.00007497, 0.4236, 73.2971),
    (0.00004244, 1.4169, 85.8273),
    (0.00003927, 3.1551, 71.8127),
    (0.00003578, 2.3116, 224.3448),
    (0.00003506, 2.5835, 138.5175),
    (0.00003229, 5.255, 3.9322),
    (0.0000306, 0.1532, 1.4845),
    (0.00002564, 0.9808, 148.0787),
    (0.00002429, 3.9944, 52.6902),
    (0.00001645, 2.6535, 127.4718),
    (0.00001584, 1.4305, 78.7138),
    (0.00001508, 5.06, 151.0477),
    (0.0000149, 2.6756, 56.6224),
    (0.00001413, 4.5746, 202.2534),
    (0.00001403, 1.3699, 77.7505),
    (0.00001228, 1.047, 62.2514),
    (0.00001033, 0.2646, 131.4039),
    (0.00000992, 2.172, 65.22),
    (0.00000862, 5.055, 351.817),
    (0.00000744, 3.076, 35.164),
    (0.00000687, 2.499, 77.963),
    (0.00000647, 4.473, 70.328),
    (0.00000624, 0.863, 9.561),
    (0.00000604, 0.907, 984.6),
    (0.00000575, 3.231, 447.796),
    (0.00000562, 2.718, 462.023),
    (0.0000053, 5.917, 213.299),
    (0.00000528, 5.151, 2.969),
];

#[rustfmt::skip]
const URANUS_R2: &[Term] = &[
    (0.0002244, 0.69953, 74.7816),
    (0.00004727, 1.699, 63.7359),
    (0.00001682, 4.6483, 70.8494),
    (0.0000165, 3.0966, 11.0457),
    (0.00001434, 3.5212, 149.5632),
    (0.0000077, 0.0, 0.0),
    (0.000005, 6.172, 76.266),
    (0.00000461, 0.767, 3.932),
    (0.0000039, 4.496, 56.622),
    (0.0000039, 5.527, 85.827),
    (0.00000292, 0.204, 52.69),
    (0.00000287, 3.534, 73.297),
    (0.00000273, 3.847, 138.517),
    (0.0000022, 1.964, 131.404),
    (0.00000216, 0.848, 77.963),
    (0.00000205, 3.248, 78.714),
    (0.00000149, 4.898, 127.472),
    (0.00000129, 2.081, 3.181),
];

#[rustfmt::skip]
const URANUS_R3: &[Term] = &[
    (0.00001164, 4.7345, 74.7816),
    (0.00000212, 3.343, 63.736),
    (0.00000196, 2.98, 70.849),
    (0.00000105, 0.958, 11.046),
    (0.00000073, 1.0, 149.56),
    (0.00000072, 0.03, 56.62),
    (0.00000055, 2.59, 3.93),
    (0.00000036, 5.65, 77.96),
    (0.00000034, 3.82, 76.27),
    (0.00000032, 3.6, 131.4),
];

#[rustfmt::skip]
const URANUS_R4: &[Term] = &[
    (0.00000053, 3.01, 74.78),
    (0.0000001, 1.91, 56.62),
];

pub(super) static URANUS: VsopModel = VsopModel {
    lon: &[URANUS_L0, URANUS_L1, URANUS_L2, URANUS_L3, URANUS_L4],
    lat: &[URANUS_B0, URANUS_B1, URANUS_B2, URANUS_B3, URANUS_B4],
    rad: &[URANUS_R0, URANUS_R1, URANUS_R2, URANUS_R3, URANUS_R4],
};

#[rustfmt::skip]
const NEPTUNE_L0: &[Term] = &[
    (5.31188633, 0.0, 0.0),
    (0.01798476, 2.9010127, 38.1330356),
    (0.01019728, 0.4858092, 1.4844727),
    (0.00124532, 4.830081, 36.648563),
    (0.00042064, 5.41055, 2.96895),
    (0.00037715, 6.09222, 35.16409),
    (0.00033785, 1.24489, 76.26607),
    (0.00016483, 0.00008, 491.55793),
    (0.00009199, 4.9375, 39.6175),
    (0.00008994, 0.2746, 175.1661),
    (0.00004216, 1.9871, 73.2971),
    (0.00003365, 1.0359, 33.6796),
    (0.00002285, 4.2061, 4.4534),
    (0.00001434, 2.7834, 74.7816),
    (0.000009, 2.076, 109.946),
    (0.00000745, 3.19, 71.813),
    (0.00000506, 5.748, 114.399),
    (0.000004, 0.35, 1021.249),
    (0.00000345, 3.462, 41.102),
    (0.0000034, 3.304, 77.751),
    (0.00000323, 2.248, 32.165),
    (0.00000306, 0.497, 0.521),
    (0.00000287, 4.505, 0.048),
    (0.00000282, 2.246, 146.594),
    (0.00000267, 4.889, 0.963),
    (0.00000252, 5.782, 388.465),
    (0.00000245, 1.247, 9.561),
    (0.00000233, 2.505, 137.033),
    (0.00000227, 1.797, 453.425),
    (0.0000017, 3.324, 108.461),
    (0.00000151, 2.192, 33.94),
    (0.0000015, 2.997, 5.938),
    (0.00000148, 0.859, 111.43),
    (0.00000119, 3.677, 2.448),
    (0.00000109, 2.416, 183.243),
    (0.00000103, 0.041, 0.261),
    (0.00000103, 4.404, 70.328),
    (0.00000102, 5.705, 0.112),
];

#[rustfmt::skip]
const NEPTUNE_L1: &[Term] = &[
    (38.37687717, 0.0, 0.0),
    (0.00016604, 4.86319, 1.48447),
    (0.00015807, 2.27923, 38.13304),
    (0.00003335, 3.682, 76.2661),
    (0.00001306, 3.6732, 2.9689),
    (0.00000605, 1.505, 35.164),
    (0.00000179, 3.453, 39.618),
    (0.00000107, 2.451, 4.453),
    (0.00000106, 2.755, 33.68),
    (0.00000073, 5.49, 36.65),
    (0.00000057, 1.86, 114.4),
    (0.00000057, 5.22, 0.52),
    (0.00000035, 4.52, 74.78),
    (0.00000032, 5.9, 77.75),
    (0.0000003, 3.67, 388.47),
    (0.00000029, 5.17, 9.56),
    (0.00000029, 5.17, 2.45),
    (0.00000026, 5.25, 168.05),
];

#[rustfmt::skip]
const NEPTUNE_L2: &[Term] = &[
    (0.00053893, 0.0, 0.0),
    (0.00000296, 1.855, 1.484),
    (0.00000281, 1.191, 38.133),
    (0.0000027, 5.721, 76.266),
    (0.00000023, 1.21, 2.97),
    (0.00000009, 4.43, 35.16),
    (0.00000007, 0.54, 2.45),
];

#[rustfmt::skip]
const NEPTUNE_L3: &[Term] = &[
    (0.00000031, 0.0, 0.0),
    (0.00000015, 1.35, 76.27),
    (0.00000012, 6.04, 1.48),
    (0.00000012, 6.11, 38.13),
];

#[rustfmt::skip]
const NEPTUNE_L4: &[Term] = &[
    (0.00000114, 3.142, 0.0),
];

#[rustfmt::skip]
const NEPTUNE_B0: &[Term] = &[
    (0.03088623, 1.4410437, 38.1330356),
    (0.0002778, 5.91272, 76.26607),
    (0.00027624, 0.0, 0.0),
    (0.00015448, 3.50877, 39.61751),
    (0.00015355, 2.52124, 36.64856),
    (0.00002, 1.51, 74.7816),
    (0.00001968, 4.3778, 1.4845),
    (0.00001015, 3.2156, 35.1641),
    (0.00000606, 2.802, 73.297),
    (0.00000595, 2.129, 41.102),
    (0.00000589, 3.187, 2.969),
    (0.00000402, 4.169, 114.399),
    (0.0000028, 1.682, 77.751),
    (0.00000262, 3.767, 213.299),
    (0.00000254, 3.271, 453.425),
    (0.00000206, 4.257, 529.691),
    (0.0000014, 3.53, 137.033),
];

#[rustfmt::skip]
const NEPTUNE_B1: &[Term] = &[
    (0.00227279, 3.807931, 38.133036),
    (0.00001803, 1.9758, 76.2661),
    (0.00001433, 3.1416, 0.0),
    (0.00001386, 4.8256, 36.6486),
    (0.00001073, 6.0805, 39.6175),
    (0.00000148, 3.858, 74.782),
    (0.00000136, 0.478, 1.484),
    (0.0000007, 6.19, 35.16),
    (0.00000052, 5.05, 73.3),
    (0.00000043, 0.31, 114.4),
    (0.00000037, 4.89, 41.1),
    (0.00000037, 5.76, 2.97),
    (0.00000026, 5.22, 213.3),
];

#[rustfmt::skip]
const NEPTUNE_B2: &[Term] = &[
    (0.00009691, 5.5712, 38.133),
    (0.00000079, 3.63, 76.27),
    (0.00000072, 0.45, 36.65),
    (0.00000059, 3.14, 0.0),
    (0.0000003, 1.61, 39.62),
    (0.00000006, 5.61, 74.78),
];

#[rustfmt::skip]
const NEPTUNE_B3: &[Term] = &[
    (0.00000273, 1.017, 38.133),
    (0.00000002, 0.0, 0.0),
    (0.00000002, 2.37, 36.65),
    (0.00000002, 5.33, 39.62),
];

#[rustfmt::skip]
const NEPTUNE_B4: &[Term] = &[
    (0.00000006, 2.67, 38.13),
];

#[rustfmt::skip]
const NEPTUNE_R0: &[Term] = &[
    (30.07013206, 0.0, 0.0),
    (0.27062259, 1.32999459, 38.13303564),
    (0.01691764, 3.2518614, 36.6485629),
    (0.00807831, 5.185928, 1.484473),
    (0.00537761, 4.521139, 35.16409),
    (0.00495726, 1.571057, 491.557929),
    (0.00274572, 1.845523, 175.16606),
    (0.00135134, 3.372206, 39.617508),
    (0.00121802, 5.797544, 76.266071),
    (0.00100895, 0.377027, 73.297126),
    (0.00069792, 3.79617, 2.96895),
    (0.00046688, 5.74938, 33.67962),
    (0.00024594, 0.50802, 109.94569),
    (0.00016939, 1.59422, 71.81265),
    (0.0001423, 1.07786, 74.7816),
    (0.00012012, 1.92062, 1021.24889),
    (0.00008395, 0.6782, 146.5943),
    (0.00007572, 1.0715, 388.4652),
    (0.00005721, 2.5906, 4.4534),
    (0.0000484, 1.9069, 41.102),
    (0.00004483, 2.9057, 529.691),
    (0.00004421, 1.7499, 108.4612),
    (0.00004354, 0.6799, 32.1645),
    (0.0000427, 3.4134, 453.4249),
    (0.00003381, 0.8481, 183.2428),
    (0.00002881, 1.986, 137.033),
    (0.00002879, 3.6742, 350.3321),
    (0.00002636, 3.0976, 213.2991),
    (0.0000253, 5.7984, 490.0735),
    (0.00002523, 0.4863, 493.0424),
    (0.00002306, 2.8096, 70.3282),
    (0.00002087, 0.6186, 33.9402),
];

#[rustfmt::skip]
const NEPTUNE_R1: &[Term] = &[
    (0.00236339, 0.70498, 38.133036),
    (0.0001322, 3.32015, 1.48447),
    (0.00008622, 6.2163, 35.1641),
    (0.00002702, 1.8814, 39.6175),
    (0.00002155, 2.0943, 2.9689),
    (0.00002153, 5.1687, 76.2661),
    (0.00001603, 0.0, 0.0),
    (0.00001464, 1.1842, 33.6796),
    (0.00001136, 3.9189, 36.6486),
    (0.00000898, 5.241, 388.465),
    (0.0000079, 0.533, 168.053),
    (0.0000076, 0.021, 182.28),
    (0.00000607, 1.077, 1021.249),
    (0.00000572, 3.401, 484.444),
    (0.00000561, 2.887, 498.671),
];

#[rustfmt::skip]
const NEPTUNE_R2: &[Term] = &[
    (0.00004247, 5.8991, 38.133),
    (0.00000218, 0.346, 1.484),
    (0.00000163, 2.239, 168.053),
    (0.00000156, 4.594, 182.28),
    (0.00000127, 2.848, 35.164),
];

#[rustfmt::skip]
const NEPTUNE_R3: &[Term] = &[
    (0.00000166, 4.552, 38.133),
];

pub(super) static NEPTUNE: VsopModel = VsopModel {
    lon: &[NEPTUNE_L0, NEPTUNE_L1, NEPTUNE_L2, NEPTUNE_L3, NEPTUNE_L4],
    lat: &[NEPTUNE_B0, NEPTUNE_B1, NEPTUNE_B2, NEPTUNE_B3, NEPTUNE_B4],
    rad: &[NEPTUNE_R0, NEPTUNE_R1, NEPTUNE_R2, NEPTUNE_R3],
};
