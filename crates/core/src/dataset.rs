//! Built-in Dhaka network: the dataset restored by "reset to defaults" and
//! used whenever a persisted slot is absent or unreadable.
//!
//! Stops carry real coordinates plus the legacy 0-100 schematic position the
//! old map still reads. Fares are whole taka.

use chaka_transit::prelude::*;

fn stop(id: &str, name: &str, map_x: f64, map_y: f64, latitude: f64, longitude: f64) -> Stop {
    Stop {
        id: StopIdentifier::new(id),
        name: name.to_owned(),
        latitude,
        longitude,
        map_x,
        map_y,
    }
}

#[allow(clippy::too_many_arguments)]
fn bus(
    id: &str,
    name: &str,
    service_class: ServiceClass,
    image: &str,
    color: &str,
    base_fare: u32,
    fare_per_stop: u32,
    route: &[&str],
    features: &[&str],
) -> Bus {
    Bus {
        id: BusIdentifier::new(id),
        name: name.to_owned(),
        service_class,
        image: image.to_owned(),
        color: color.to_owned(),
        route: route.iter().map(|s| StopIdentifier::new(s)).collect(),
        base_fare,
        fare_per_stop,
        features: features.iter().map(|s| (*s).to_owned()).collect(),
    }
}

pub fn default_stops() -> Vec<Stop> {
    vec![
        stop("abdullahpur", "Abdullahpur", 50.0, 5.0, 23.8785, 90.3995),
        stop("uttara", "Uttara (House Bldg)", 50.0, 10.0, 23.8728, 90.3984),
        stop("airport", "Airport", 50.0, 20.0, 23.8518, 90.4081),
        stop("khilkhet", "Khilkhet", 55.0, 22.0, 23.8327, 90.4172),
        stop("kuril", "Kuril Bishwa Road", 65.0, 25.0, 23.8223, 90.4275),
        stop("bashundhara", "Bashundhara Gate", 70.0, 28.0, 23.8139, 90.4233),
        stop("notun_bazar", "Notun Bazar", 70.0, 32.0, 23.7954, 90.4251),
        stop("mirpur_zoo", "Mirpur Zoo/Sony", 15.0, 15.0, 23.8115, 90.3496),
        stop("mirpur12", "Mirpur 12", 20.0, 20.0, 23.8273, 90.3639),
        stop("mirpur10", "Mirpur 10", 20.0, 30.0, 23.8069, 90.3686),
        stop("kazipara", "Kazipara", 25.0, 35.0, 23.7972, 90.3725),
        stop("shewrapara", "Shewrapara", 25.0, 38.0, 23.7885, 90.3752),
        stop("mirpur1", "Mirpur 1", 20.0, 40.0, 23.7956, 90.3537),
        stop("gabtoli", "Gabtoli", 10.0, 45.0, 23.7837, 90.3442),
        stop("kallyanpur", "Kallyanpur", 20.0, 48.0, 23.7785, 90.3620),
        stop("shyamoli", "Shyamoli", 30.0, 50.0, 23.7718, 90.3631),
        stop("kalshi", "Kalshi", 25.0, 15.0, 23.8197, 90.3808),
        stop("agargaon", "Agargaon", 30.0, 45.0, 23.7763, 90.3736),
        stop("bijoy_sarani", "Bijoy Sarani", 40.0, 50.0, 23.7663, 90.3891),
        stop("mohakhali", "Mohakhali", 50.0, 45.0, 23.7776, 90.4048),
        stop("banani", "Banani", 55.0, 40.0, 23.7937, 90.4043),
        stop("gulshan1", "Gulshan 1", 65.0, 45.0, 23.7786, 90.4165),
        stop("gulshan2", "Gulshan 2", 65.0, 42.0, 23.7979, 90.4144),
        stop("farmgate", "Farmgate", 45.0, 55.0, 23.7561, 90.3871),
        stop("karwan_bazar", "Karwan Bazar", 45.0, 58.0, 23.7508, 90.3934),
        stop("bangla_motor", "Bangla Motor", 50.0, 60.0, 23.7460, 90.3952),
        stop("mogbazar", "Mogbazar", 55.0, 60.0, 23.7494, 90.4087),
        stop("malibagh", "Malibagh", 60.0, 62.0, 23.7483, 90.4120),
        stop("shantinagar", "Shantinagar", 58.0, 65.0, 23.7420, 90.4146),
        stop("dhanmondi27", "Dhanmondi 27", 35.0, 60.0, 23.7543, 90.3722),
        stop("dhanmondi32", "Dhanmondi 32", 38.0, 62.0, 23.7513, 90.3778),
        stop("asad_gate", "Asad Gate", 32.0, 55.0, 23.7621, 90.3752),
        stop("science_lab", "Science Lab", 40.0, 65.0, 23.7390, 90.3835),
        stop("new_market", "New Market", 40.0, 68.0, 23.7335, 90.3853),
        stop("nilkhet", "Nilkhet", 42.0, 69.0, 23.7314, 90.3875),
        stop("azimpur", "Azimpur", 42.0, 75.0, 23.7276, 90.3861),
        stop("shahbag", "Shahbag", 50.0, 70.0, 23.7381, 90.3957),
        stop("paltan", "Paltan", 52.0, 75.0, 23.7297, 90.4093),
        stop("motijheel", "Motijheel", 55.0, 80.0, 23.7330, 90.4172),
        stop("sadarghat", "Sadarghat", 55.0, 90.0, 23.7048, 90.4124),
        stop("gulistan", "Gulistan", 53.0, 82.0, 23.7246, 90.4116),
        stop("badda", "Middle Badda", 70.0, 35.0, 23.7806, 90.4267),
        stop("rampura", "Rampura", 70.0, 50.0, 23.7612, 90.4208),
        stop("khilgaon", "Khilgaon", 72.0, 55.0, 23.7490, 90.4261),
        stop("bashabo", "Bashabo", 75.0, 60.0, 23.7431, 90.4326),
        stop("jatrabari", "Jatrabari", 65.0, 85.0, 23.7126, 90.4304),
        stop("sayedabad", "Sayedabad", 63.0, 83.0, 23.7188, 90.4244),
        stop("signboard", "Signboard", 70.0, 90.0, 23.6938, 90.4705),
        stop("mohammadpur", "Mohammadpur", 25.0, 55.0, 23.7658, 90.3584),
        stop("bosila", "Bosila", 20.0, 60.0, 23.7528, 90.3478),
        stop("savar", "Savar", 0.0, 30.0, 23.8483, 90.2672),
        stop("demra", "Demra", 80.0, 80.0, 23.7093, 90.5059),
        stop("kadamtoli", "Kadamtoli", 60.0, 88.0, 23.6961, 90.4378),
        stop("mugda", "Mugda", 68.0, 70.0, 23.7317, 90.4338),
    ]
}

pub fn default_buses() -> Vec<Bus> {
    vec![
        bus(
            "raida",
            "Raida Paribahan",
            ServiceClass::SittingService,
            "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?q=80&w=800&auto=format&fit=crop",
            "bg-blue-600",
            15,
            5,
            &[
                "abdullahpur", "uttara", "airport", "khilkhet", "kuril", "notun_bazar", "badda",
                "rampura", "malibagh", "mogbazar", "paltan", "gulistan", "jatrabari", "signboard",
            ],
            &["Wi-Fi", "Comfortable Seats", "Direct"],
        ),
        bus(
            "victor_classic",
            "Victor Classic",
            ServiceClass::Local,
            "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?q=80&w=800&auto=format&fit=crop",
            "bg-green-600",
            10,
            3,
            &[
                "sadarghat", "gulistan", "paltan", "shantinagar", "malibagh", "rampura", "badda",
                "notun_bazar", "kuril", "khilkhet", "airport", "uttara", "abdullahpur",
            ],
            &["Low Cost", "Frequent Stops"],
        ),
        bus(
            "akash",
            "Akash Paribahan",
            ServiceClass::Local,
            "https://images.unsplash.com/photo-1606822368297-f5d6f8272915?q=80&w=800&auto=format&fit=crop",
            "bg-indigo-600",
            10,
            3,
            &[
                "kadamtoli", "jatrabari", "gulistan", "mogbazar", "mohakhali", "banani", "airport",
                "uttara", "abdullahpur",
            ],
            &["Frequent Service"],
        ),
        bus(
            "bikolpo",
            "Bikolpo Auto",
            ServiceClass::SittingService,
            "https://images.unsplash.com/photo-1464219789935-c2d9d9aba644?q=80&w=800&auto=format&fit=crop",
            "bg-purple-600",
            20,
            5,
            &[
                "mirpur12", "mirpur10", "mirpur1", "kallyanpur", "shyamoli", "asad_gate",
                "farmgate", "shahbag", "paltan", "motijheel",
            ],
            &["Direct Route", "Fan", "Safe Driving"],
        ),
        bus(
            "shikhor",
            "Shikhor Paribahan",
            ServiceClass::SittingService,
            "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?q=80&w=800&auto=format&fit=crop",
            "bg-sky-600",
            15,
            4,
            &[
                "mirpur12", "mirpur10", "kazipara", "agargaon", "bijoy_sarani", "farmgate",
                "shahbag", "paltan", "jatrabari",
            ],
            &["Comfortable"],
        ),
        bus(
            "trans_silva",
            "Trans Silva",
            ServiceClass::Local,
            "https://images.unsplash.com/photo-1557223562-6c77ef16210f?q=80&w=800&auto=format&fit=crop",
            "bg-orange-600",
            10,
            4,
            &[
                "mirpur1", "kallyanpur", "shyamoli", "asad_gate", "dhanmondi27", "science_lab",
                "shahbag", "paltan", "motijheel", "sadarghat",
            ],
            &["Available at Night", "Spacious"],
        ),
        bus(
            "dhaka_chaka",
            "Dhaka Chaka",
            ServiceClass::Ac,
            "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?q=80&w=800&auto=format&fit=crop",
            "bg-red-600",
            30,
            15,
            &["banani", "gulshan2", "gulshan1", "badda", "rampura"],
            &["Air Conditioned", "Ticket System", "Security", "CCTV"],
        ),
        bus(
            "alif",
            "Alif Enterprise",
            ServiceClass::SittingService,
            "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?q=80&w=800&auto=format&fit=crop",
            "bg-teal-600",
            15,
            5,
            &[
                "mirpur10", "mirpur_zoo", "mirpur1", "shyamoli", "kallyanpur", "gabtoli", "savar",
            ],
            &["Fast", "Highway Bus"],
        ),
        bus(
            "brtc_ac",
            "BRTC AC (Double Decker)",
            ServiceClass::Ac,
            "https://images.unsplash.com/photo-1532104333-e7a83d7265a9?q=80&w=800&auto=format&fit=crop",
            "bg-red-700",
            20,
            10,
            &[
                "abdullahpur", "uttara", "airport", "banani", "farmgate", "shahbag", "paltan",
                "motijheel",
            ],
            &["Double Decker", "AC", "State Owned"],
        ),
        bus(
            "bihanga",
            "Bihanga Paribahan",
            ServiceClass::Local,
            "https://images.unsplash.com/photo-1606822368297-f5d6f8272915?q=80&w=800&auto=format&fit=crop",
            "bg-emerald-600",
            10,
            3,
            &["mirpur12", "mirpur10", "kazipara", "mohakhali", "gulshan1", "badda"],
            &["Frequent", "Connects Mirpur to Badda"],
        ),
        bus(
            "dewan",
            "Dewan Paribahan",
            ServiceClass::Local,
            "https://images.unsplash.com/photo-1464219789935-c2d9d9aba644?q=80&w=800&auto=format&fit=crop",
            "bg-cyan-600",
            10,
            4,
            &[
                "azimpur", "nilkhet", "new_market", "science_lab", "shyamoli", "mohakhali", "kuril",
            ],
            &["Popular Route"],
        ),
        bus(
            "turag",
            "Turag Paribahan",
            ServiceClass::Local,
            "https://images.unsplash.com/photo-1557223562-6c77ef16210f?q=80&w=800&auto=format&fit=crop",
            "bg-yellow-600",
            10,
            3,
            &[
                "jatrabari", "sayedabad", "mugda", "bashabo", "khilgaon", "rampura", "badda",
                "notun_bazar", "kuril", "uttara", "abdullahpur",
            ],
            &["Covers East Side", "Crowded"],
        ),
        bus(
            "achim",
            "Achim Paribahan",
            ServiceClass::Local,
            "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?q=80&w=800&auto=format&fit=crop",
            "bg-lime-600",
            10,
            3,
            &[
                "gabtoli", "mirpur1", "mirpur10", "kalshi", "kuril", "notun_bazar", "badda",
                "rampura", "demra",
            ],
            &["Long Route", "Economy"],
        ),
        bus(
            "prozapoti",
            "Projapoti Paribahan",
            ServiceClass::SittingService,
            "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?q=80&w=800&auto=format&fit=crop",
            "bg-pink-600",
            15,
            5,
            &[
                "bosila", "mohammadpur", "shyamoli", "kallyanpur", "mirpur1", "mirpur10",
                "mirpur12", "kalshi", "airport", "uttara",
            ],
            &["New Buses", "Clean"],
        ),
    ]
}

/// The default dataset as a ready-to-query network
pub fn default_network() -> BusNetwork {
    BusNetwork::from_data(default_stops(), default_buses())
}
